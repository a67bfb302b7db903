use std::path::Path;

use asset_shelf_application::{LibraryScanner, PreviewCache};
use asset_shelf_domain::{
    is_environment_map, is_hidden, is_library_file, is_preview_image, AssetEntry, PrimaryFile,
    ScanTarget,
};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Scans the category/subcategory/item layout of a library root.
///
/// Children are visited in file-name order so that repeated scans of an
/// unchanged tree produce identical ordinals.
#[derive(Debug, Default)]
pub struct WalkdirLibraryScanner;

impl LibraryScanner for WalkdirLibraryScanner {
    fn scan(&self, target: &ScanTarget, previews: &mut PreviewCache) -> Vec<AssetEntry> {
        match target {
            ScanTarget::Root(dir) => self.scan_root(dir, previews),
            ScanTarget::Category(dir) => self.scan_category(dir, previews),
            ScanTarget::Subcategory(dir) => self.scan_subcategory(dir, previews),
        }
    }
}

impl WalkdirLibraryScanner {
    pub fn scan_root(&self, dir: &Path, previews: &mut PreviewCache) -> Vec<AssetEntry> {
        let mut entries = Vec::new();
        for category in child_folders(dir) {
            self.collect_category(category.path(), previews, &mut entries);
        }
        entries
    }

    pub fn scan_category(&self, dir: &Path, previews: &mut PreviewCache) -> Vec<AssetEntry> {
        let mut entries = Vec::new();
        self.collect_category(dir, previews, &mut entries);
        entries
    }

    pub fn scan_subcategory(&self, dir: &Path, previews: &mut PreviewCache) -> Vec<AssetEntry> {
        let mut entries = Vec::new();
        self.collect_subcategory(dir, previews, &mut entries);
        entries
    }

    /// Builds the entry for one item folder, or for a loose environment map.
    /// Returns `None` for anything without a usable preview.
    pub fn scan_item(
        &self,
        path: &Path,
        ordinal: usize,
        previews: &mut PreviewCache,
    ) -> Option<AssetEntry> {
        let name = path.file_name()?.to_string_lossy().to_string();

        if !path.is_dir() {
            if !is_environment_map(&name) {
                return None;
            }
            return Some(AssetEntry {
                key: path.to_path_buf(),
                display_name: name.clone(),
                primary_file: PrimaryFile::EnvironmentMap(name),
                preview: previews.get_or_empty(path),
                ordinal,
            });
        }

        let files: Vec<String> = list_children(path)
            .into_iter()
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.file_name().to_string_lossy().to_string())
            .collect();

        let primary_file = files
            .iter()
            .find(|file| is_library_file(file))
            .or_else(|| files.iter().find(|file| is_environment_map(file)))
            .map(|file| PrimaryFile::from_file_name(file))
            .unwrap_or(PrimaryFile::NoFile);

        let preview_subject = match files.iter().find(|file| is_preview_image(file)) {
            Some(image) => path.join(image),
            None => match &primary_file {
                PrimaryFile::EnvironmentMap(map) => path.join(map),
                PrimaryFile::Library(_) | PrimaryFile::NoFile => {
                    debug!(folder = %path.display(), "skipping item without preview");
                    return None;
                }
            },
        };

        let key = match primary_file.file_name() {
            Some(file) => path.join(file),
            None => path.to_path_buf(),
        };

        Some(AssetEntry {
            key,
            display_name: name,
            primary_file,
            preview: previews.get_or_empty(&preview_subject),
            ordinal,
        })
    }

    fn collect_category(
        &self,
        dir: &Path,
        previews: &mut PreviewCache,
        entries: &mut Vec<AssetEntry>,
    ) {
        for subcategory in child_folders(dir) {
            self.collect_subcategory(subcategory.path(), previews, entries);
        }
    }

    fn collect_subcategory(
        &self,
        dir: &Path,
        previews: &mut PreviewCache,
        entries: &mut Vec<AssetEntry>,
    ) {
        for item in list_children(dir) {
            if let Some(entry) = self.scan_item(item.path(), entries.len(), previews) {
                entries.push(entry);
            }
        }
    }
}

/// Direct, non-hidden children of `dir` in file-name order. A missing
/// directory has no children; unreadable entries are skipped.
fn list_children(dir: &Path) -> Vec<DirEntry> {
    if !dir.is_dir() {
        debug!(directory = %dir.display(), "directory not found");
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(error) => {
                warn!(directory = %dir.display(), %error, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| !is_hidden(&entry.file_name().to_string_lossy()))
        .collect()
}

fn child_folders(dir: &Path) -> Vec<DirEntry> {
    list_children(dir)
        .into_iter()
        .filter(|entry| entry.file_type().is_dir())
        .collect()
}
