use std::path::PathBuf;

use asset_shelf_domain::{
    CategorySelection, EnvironmentSettings, ImportOptions, LibraryTab, NavigationState,
    RenderVariant,
};

#[derive(Debug, Clone, Copy)]
pub struct ListCategoriesQuery {
    pub tab: LibraryTab,
}

#[derive(Debug, Clone)]
pub struct ListSubcategoriesQuery {
    pub tab: LibraryTab,
    pub category: CategorySelection,
}

#[derive(Debug, Clone)]
pub struct ListAssetsQuery {
    pub navigation: NavigationState,
}

#[derive(Debug, Clone, Default)]
pub struct RescanCommand;

#[derive(Debug, Clone)]
pub struct ResolveVariantQuery {
    pub key: PathBuf,
    pub variant: RenderVariant,
}

#[derive(Debug, Clone)]
pub struct PreviewSourceQuery {
    pub key: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PlanObjectImportCommand {
    pub key: PathBuf,
    pub variant: RenderVariant,
    /// Falls back to the configured import options when `None`.
    pub options: Option<ImportOptions>,
}

#[derive(Debug, Clone)]
pub struct PlanMaterialImportCommand {
    pub key: PathBuf,
    pub variant: RenderVariant,
    pub has_active_object: bool,
}

#[derive(Debug, Clone)]
pub struct ApplyEnvironmentCommand {
    pub key: PathBuf,
    /// Falls back to the configured environment settings when `None`.
    pub settings: Option<EnvironmentSettings>,
}

#[derive(Debug, Clone, Copy)]
pub struct ScaffoldLibraryCommand {
    pub tab: LibraryTab,
}
