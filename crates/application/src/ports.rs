use std::path::Path;

use asset_shelf_domain::{
    AssetEntry, EnvironmentSettings, LibraryContents, PreviewImage, ScanTarget,
};

use crate::{ApplicationError, PreviewCache};

/// Decodes an image file into a displayable thumbnail.
pub trait PreviewDecoder {
    fn decode_preview(&self, path: &Path) -> Result<PreviewImage, ApplicationError>;
}

/// Walks the library tree at the granularity `target` names.
///
/// Never fails: missing directories yield no entries and per-item problems
/// are isolated to the item.
pub trait LibraryScanner {
    fn scan(&self, target: &ScanTarget, previews: &mut PreviewCache) -> Vec<AssetEntry>;
}

pub trait FolderTree {
    /// Names of the direct, non-hidden subdirectories of `dir`. Empty when
    /// `dir` does not exist.
    fn child_folders(&self, dir: &Path) -> Vec<String>;

    /// Creates `dir` if missing; returns whether it had to be created.
    fn ensure_folder(&self, dir: &Path) -> Result<bool, ApplicationError>;
}

/// Host collaborator that opens a library file and enumerates what it holds.
pub trait LibraryLoader {
    fn load_contents(&self, library_file: &Path) -> Result<LibraryContents, ApplicationError>;
}

/// Host collaborator that lights the scene with an environment map.
pub trait EnvironmentApplier {
    fn apply_environment(
        &self,
        environment_map: &Path,
        settings: &EnvironmentSettings,
    ) -> Result<(), ApplicationError>;
}
