use std::path::{Path, PathBuf};

use crate::classify::{detect_file_kind, FileKind};

/// Key carried by the synthetic entry shown when a scan finds nothing.
pub const PLACEHOLDER_KEY: &str = "empty";

/// Opaque reference to a decoded thumbnail held by the preview cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PreviewHandle(u64);

impl PreviewHandle {
    /// Item has no usable preview.
    pub const EMPTY: Self = Self(0);
    /// Shown on the synthetic entry of an empty listing.
    pub const NO_RESULTS: Self = Self(1);

    pub const FIRST_DECODED: u64 = 2;

    pub fn from_raw(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_decoded(self) -> bool {
        self.0 >= Self::FIRST_DECODED
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimaryFile {
    Library(String),
    EnvironmentMap(String),
    NoFile,
}

impl PrimaryFile {
    pub fn from_file_name(name: &str) -> Self {
        match detect_file_kind(Path::new(name)) {
            FileKind::Library => Self::Library(name.to_string()),
            FileKind::EnvironmentMap => Self::EnvironmentMap(name.to_string()),
            FileKind::PreviewImage | FileKind::Other => Self::NoFile,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::Library(name) | Self::EnvironmentMap(name) => Some(name),
            Self::NoFile => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub key: PathBuf,
    pub display_name: String,
    pub primary_file: PrimaryFile,
    pub preview: PreviewHandle,
    pub ordinal: usize,
}

impl AssetEntry {
    pub fn placeholder(preview: PreviewHandle) -> Self {
        Self {
            key: PathBuf::from(PLACEHOLDER_KEY),
            display_name: String::new(),
            primary_file: PrimaryFile::NoFile,
            preview,
            ordinal: 0,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.key.as_os_str() == PLACEHOLDER_KEY
    }

    pub fn is_library(&self) -> bool {
        matches!(self.primary_file, PrimaryFile::Library(_))
    }

    pub fn is_environment_map(&self) -> bool {
        matches!(self.primary_file, PrimaryFile::EnvironmentMap(_))
    }
}
