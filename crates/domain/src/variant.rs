use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{is_library_file, DomainError};

/// Render back-end a library file is authored for. Sibling files differ only
/// by the back-end token embedded in their file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderVariant {
    #[default]
    Cycles,
    Corona,
}

impl RenderVariant {
    pub fn token(self) -> &'static str {
        match self {
            Self::Cycles => "Cycles",
            Self::Corona => "Corona",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Cycles => Self::Corona,
            Self::Corona => Self::Cycles,
        }
    }
}

impl Display for RenderVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for RenderVariant {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "cycles" => Ok(Self::Cycles),
            "corona" => Ok(Self::Corona),
            _ => Err(DomainError::UnknownVariant(value.to_string())),
        }
    }
}

/// Maps a selected library file to its sibling for `active`.
///
/// Returns `None` when the selection is not a library file. The substitution
/// is purely textual and only touches the file name; whether the sibling
/// exists is left to whoever opens it. A name that is not valid UTF-8 is
/// returned unchanged.
pub fn resolve_variant(selected: &Path, active: RenderVariant) -> Option<PathBuf> {
    if !is_library_file(selected) {
        return None;
    }

    let Some(file_name) = selected.file_name().and_then(|name| name.to_str()) else {
        return Some(selected.to_path_buf());
    };
    let inactive = active.other().token();
    if !file_name.contains(inactive) {
        return Some(selected.to_path_buf());
    }

    Some(selected.with_file_name(file_name.replace(inactive, active.token())))
}
