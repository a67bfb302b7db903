use std::fs;
use std::path::Path;

use asset_shelf_application::{ApplicationError, FolderTree};
use asset_shelf_domain::is_hidden;
use walkdir::WalkDir;

#[derive(Debug, Default)]
pub struct FsFolderTree;

impl FolderTree for FsFolderTree {
    fn child_folders(&self, dir: &Path) -> Vec<String> {
        if !dir.is_dir() {
            return Vec::new();
        }

        WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .filter(|name| !is_hidden(name))
            .collect()
    }

    fn ensure_folder(&self, dir: &Path) -> Result<bool, ApplicationError> {
        if dir.is_dir() {
            return Ok(false);
        }
        fs::create_dir_all(dir).map_err(|error| ApplicationError::Io(error.to_string()))?;
        Ok(true)
    }
}
