use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DomainError, RenderVariant};

pub const ALL_NODE_NAME: &str = "All";
pub const NO_SUBCATEGORY_NAME: &str = ".";

/// Which independently rooted library the user is browsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryTab {
    #[default]
    Objects,
    Materials,
    Environments,
}

impl LibraryTab {
    pub const ALL: [LibraryTab; 3] = [Self::Objects, Self::Materials, Self::Environments];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Objects => "objects",
            Self::Materials => "materials",
            Self::Environments => "environments",
        }
    }
}

impl Display for LibraryTab {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LibraryTab {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "objects" => Ok(Self::Objects),
            "materials" => Ok(Self::Materials),
            "environments" => Ok(Self::Environments),
            _ => Err(DomainError::UnknownTab(value.to_string())),
        }
    }
}

/// One level of the category/subcategory enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogNode {
    pub name: String,
    pub is_synthetic: bool,
}

impl CatalogNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_synthetic: false,
        }
    }

    /// The wildcard aggregating every child at its level.
    pub fn all() -> Self {
        Self {
            name: ALL_NODE_NAME.to_string(),
            is_synthetic: true,
        }
    }

    /// Stands in for the subcategory list while the category is `All`.
    pub fn no_subcategory() -> Self {
        Self {
            name: NO_SUBCATEGORY_NAME.to_string(),
            is_synthetic: true,
        }
    }

    pub fn as_category(&self) -> CategorySelection {
        if self.is_synthetic {
            CategorySelection::All
        } else {
            CategorySelection::Named(self.name.clone())
        }
    }

    pub fn as_subcategory(&self) -> SubcategorySelection {
        match (self.is_synthetic, self.name.as_str()) {
            (true, NO_SUBCATEGORY_NAME) => SubcategorySelection::NotApplicable,
            (true, _) => SubcategorySelection::All,
            (false, name) => SubcategorySelection::Named(name.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategorySelection {
    #[default]
    All,
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SubcategorySelection {
    All,
    #[default]
    NotApplicable,
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub tab: LibraryTab,
    pub category: CategorySelection,
    pub subcategory: SubcategorySelection,
    pub render_variant: RenderVariant,
}

impl NavigationState {
    pub fn new(tab: LibraryTab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn select_tab(&mut self, tab: LibraryTab) {
        self.tab = tab;
        self.select_category(CategorySelection::All);
    }

    pub fn select_category(&mut self, category: CategorySelection) {
        self.subcategory = match category {
            CategorySelection::All => SubcategorySelection::NotApplicable,
            CategorySelection::Named(_) => SubcategorySelection::All,
        };
        self.category = category;
    }

    pub fn select_subcategory(&mut self, subcategory: SubcategorySelection) {
        self.subcategory = subcategory;
    }
}

/// The directory a navigation state implies, tagged with the scan granularity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScanTarget {
    Root(PathBuf),
    Category(PathBuf),
    Subcategory(PathBuf),
}

impl ScanTarget {
    pub fn resolve(root: &Path, navigation: &NavigationState) -> Self {
        match (&navigation.category, &navigation.subcategory) {
            (CategorySelection::All, _) => Self::Root(root.to_path_buf()),
            (CategorySelection::Named(category), SubcategorySelection::Named(subcategory)) => {
                Self::Subcategory(root.join(category).join(subcategory))
            }
            (CategorySelection::Named(category), _) => Self::Category(root.join(category)),
        }
    }

    pub fn directory(&self) -> &Path {
        match self {
            Self::Root(path) | Self::Category(path) | Self::Subcategory(path) => path,
        }
    }
}
