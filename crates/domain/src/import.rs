use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name a library file gives its top-level grouping unless the author renamed it.
pub const DEFAULT_GROUPING_NAME: &str = "Collection";
/// Container every imported asset is parented under.
pub const ASSETS_CONTAINER_NAME: &str = "Assets";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    pub import_everything: bool,
    pub auto_rename: bool,
    pub exclude_cameras: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            import_everything: false,
            auto_rename: true,
            exclude_cameras: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Mesh,
    Light,
    Camera,
    Empty,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryObject {
    pub name: String,
    pub kind: ObjectKind,
}

/// What a library file exposes at its top level. Older files carry no
/// groupings at all, only loose objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryContents {
    pub groupings: Vec<String>,
    pub objects: Vec<LibraryObject>,
    pub materials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSelection {
    Groupings(Vec<String>),
    Objects(Vec<String>),
}

impl ImportSelection {
    pub fn names(&self) -> &[String] {
        match self {
            Self::Groupings(names) | Self::Objects(names) => names,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPlan {
    pub library_file: PathBuf,
    pub parent_container: String,
    pub destination: String,
    pub selection: ImportSelection,
    pub rename_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialImportPlan {
    pub library_file: PathBuf,
    pub materials: Vec<String>,
    pub assign_to_active: bool,
}

/// Case-insensitive "starts with the default grouping name", which also
/// covers numbered duplicates such as `Collection.001`.
pub fn is_default_grouping_name(name: &str) -> bool {
    name.get(..DEFAULT_GROUPING_NAME.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DEFAULT_GROUPING_NAME))
}

pub fn resolve_import_set(groupings: &[String], options: &ImportOptions) -> Vec<String> {
    if options.import_everything {
        return groupings.to_vec();
    }

    if let Some(exact) = groupings
        .iter()
        .find(|name| name.as_str() == DEFAULT_GROUPING_NAME)
    {
        return vec![exact.clone()];
    }

    let prefixed: Vec<String> = groupings
        .iter()
        .filter(|name| is_default_grouping_name(name))
        .cloned()
        .collect();
    if !prefixed.is_empty() {
        return prefixed;
    }

    // Unrecognised structure: bring everything rather than drop it.
    groupings.to_vec()
}

pub fn rename_target(
    imported: &[String],
    destination: &str,
    options: &ImportOptions,
) -> Option<String> {
    match imported {
        [only] if options.auto_rename && is_default_grouping_name(only) => {
            Some(destination.to_string())
        }
        _ => None,
    }
}

/// Loose objects to import when the file has no groupings.
pub fn importable_objects(objects: &[LibraryObject], options: &ImportOptions) -> Vec<String> {
    objects
        .iter()
        .filter(|object| !(options.exclude_cameras && object.kind == ObjectKind::Camera))
        .map(|object| object.name.clone())
        .collect()
}

/// Destination container name: the file stem, title-cased.
pub fn destination_name(library_file: &Path) -> String {
    let stem = library_file
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    title_case(&stem)
}

pub fn plan_import(
    library_file: &Path,
    contents: &LibraryContents,
    options: &ImportOptions,
) -> ImportPlan {
    let destination = destination_name(library_file);

    let (selection, rename_to) = if contents.groupings.is_empty() {
        (
            ImportSelection::Objects(importable_objects(&contents.objects, options)),
            None,
        )
    } else {
        let groupings = resolve_import_set(&contents.groupings, options);
        let rename_to = rename_target(&groupings, &destination, options);
        (ImportSelection::Groupings(groupings), rename_to)
    };

    ImportPlan {
        library_file: library_file.to_path_buf(),
        parent_container: ASSETS_CONTAINER_NAME.to_string(),
        destination,
        selection,
        rename_to,
    }
}

fn title_case(value: &str) -> String {
    let mut output = String::with_capacity(value.len());
    let mut previous_is_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                output.extend(ch.to_lowercase());
            } else {
                output.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            output.push(ch);
            previous_is_letter = false;
        }
    }
    output
}
