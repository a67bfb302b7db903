mod catalog_index;
mod config;
mod error;
mod ports;
mod preview_cache;
mod scaffold;
mod scan_cache;
mod service;
mod use_cases;

pub use catalog_index::{categories_of, subcategories_of};
pub use config::{CatalogConfig, LibraryRoots};
pub use error::ApplicationError;
pub use ports::{EnvironmentApplier, FolderTree, LibraryLoader, LibraryScanner, PreviewDecoder};
pub use preview_cache::PreviewCache;
pub use scaffold::{scaffold_library, DEFAULT_LAYOUT};
pub use scan_cache::{ScanCache, ScanCacheEntry};
pub use service::CatalogService;
pub use use_cases::{
    ApplyEnvironmentCommand, ListAssetsQuery, ListCategoriesQuery, ListSubcategoriesQuery,
    PlanMaterialImportCommand, PlanObjectImportCommand, PreviewSourceQuery, RescanCommand,
    ResolveVariantQuery, ScaffoldLibraryCommand,
};
