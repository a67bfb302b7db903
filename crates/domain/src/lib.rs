mod classify;
mod entry;
mod environment;
mod error;
mod import;
mod preview;
mod taxonomy;
mod variant;

pub use classify::{
    detect_file_kind, is_environment_map, is_hidden, is_library_file, is_preview_image, FileKind,
};
pub use entry::{AssetEntry, PreviewHandle, PrimaryFile, PLACEHOLDER_KEY};
pub use environment::EnvironmentSettings;
pub use error::DomainError;
pub use import::{
    destination_name, importable_objects, is_default_grouping_name, plan_import,
    rename_target, resolve_import_set, ImportOptions, ImportPlan, ImportSelection,
    LibraryContents, LibraryObject, MaterialImportPlan, ObjectKind, ASSETS_CONTAINER_NAME,
    DEFAULT_GROUPING_NAME,
};
pub use preview::PreviewImage;
pub use taxonomy::{
    CatalogNode, CategorySelection, LibraryTab, NavigationState, ScanTarget,
    SubcategorySelection, ALL_NODE_NAME, NO_SUBCATEGORY_NAME,
};
pub use variant::{resolve_variant, RenderVariant};
