use std::path::Path;

const LIBRARY_EXTENSIONS: &[&str] = &["blend"];
const ENVIRONMENT_EXTENSIONS: &[&str] = &["hdr", "hdri", "exr"];
const PREVIEW_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Library,
    EnvironmentMap,
    PreviewImage,
    Other,
}

pub fn detect_file_kind(path: &Path) -> FileKind {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return FileKind::Other;
    };

    let ext = ext.to_ascii_lowercase();
    if LIBRARY_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Library
    } else if ENVIRONMENT_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::EnvironmentMap
    } else if PREVIEW_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::PreviewImage
    } else {
        FileKind::Other
    }
}

pub fn is_library_file(path: impl AsRef<Path>) -> bool {
    detect_file_kind(path.as_ref()) == FileKind::Library
}

pub fn is_environment_map(path: impl AsRef<Path>) -> bool {
    detect_file_kind(path.as_ref()) == FileKind::EnvironmentMap
}

pub fn is_preview_image(path: impl AsRef<Path>) -> bool {
    detect_file_kind(path.as_ref()) == FileKind::PreviewImage
}

/// Dot-prefixed names are never part of the taxonomy.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
