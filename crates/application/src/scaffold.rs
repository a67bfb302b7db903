use std::path::Path;

use tracing::info;

use crate::{ApplicationError, FolderTree};

pub const DEFAULT_LAYOUT: &[(&str, &[&str])] = &[
    (
        "Architectural",
        &["Decoration", "Doors", "Radiators", "Stairs", "Switches", "Windows"],
    ),
    (
        "Bathroom",
        &["Basins", "Baths", "Details", "Mirrors", "Radiators", "Showers", "WC"],
    ),
    ("Bedroom", &["Beds", "Furniture"]),
    ("Clothing", &["Accessories", "Tops"]),
    ("Decorations", &["Modern", "Toys", "Traditional", "Wall"]),
    ("Dining", &["Dinnerware", "Glassware", "Table"]),
    ("Electronics", &["TVs", "Monitors"]),
    ("Food & drink", &["Alcohol", "Food", "Soft Drinks"]),
    ("Furniture Details", &["Blinds", "Curtains", "Cushions", "Rugs"]),
    (
        "Kitchen",
        &["Accessories", "Cooking", "Kitchen Electronics", "Sinks", "Taps & Utensils"],
    ),
    (
        "Lighting",
        &["Bulbs", "Ceiling pendants", "Desk lamps", "Floor Lamps", "Wall Lamps"],
    ),
    ("Office", &["Electronics", "Desks", "Chairs"]),
    ("Plants", &["Indoor", "Outdoor"]),
    (
        "Seating",
        &["Stools", "Lounge Chairs", "Sofas", "Benches", "Chairs"],
    ),
    ("Storage", &["Book Shelves", "Dressers", "TV Units", "Wardrobes"]),
    (
        "Tables",
        &["Coffee Tables", "Dining Tables", "Office Desks", "Side Tables"],
    ),
    (
        "Materials",
        &[
            "Brick", "Concrete", "Fabrics", "Ground", "HDRI", "Leather", "Worktops", "Metal",
            "Paint", "Plaster", "Plastic", "Stone", "Tiles", "Wood", "Wood Floors",
        ],
    ),
];

/// Creates the missing parts of `layout` under `root`. Existing folders are
/// left alone; returns how many folders were created.
pub fn scaffold_library(
    folders: &dyn FolderTree,
    root: &Path,
    layout: &[(&str, &[&str])],
) -> Result<usize, ApplicationError> {
    if root.as_os_str().is_empty() {
        return Err(ApplicationError::InvalidInput(
            "library root must not be empty".to_string(),
        ));
    }

    let mut created = usize::from(folders.ensure_folder(root)?);
    for (category, subcategories) in layout {
        let category_path = root.join(category);
        created += usize::from(folders.ensure_folder(&category_path)?);
        for subcategory in *subcategories {
            created += usize::from(folders.ensure_folder(&category_path.join(subcategory))?);
        }
    }

    info!(root = %root.display(), created, "library skeleton scaffolded");
    Ok(created)
}
