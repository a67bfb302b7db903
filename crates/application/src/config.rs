use std::path::{Path, PathBuf};

use asset_shelf_domain::{EnvironmentSettings, ImportOptions, LibraryTab};
use serde::{Deserialize, Serialize};

use crate::ApplicationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LibraryRoots {
    pub objects: PathBuf,
    pub materials: PathBuf,
    pub environments: PathBuf,
}

impl Default for LibraryRoots {
    fn default() -> Self {
        Self {
            objects: PathBuf::from("Assets"),
            materials: PathBuf::from("Assets"),
            environments: PathBuf::from("Assets"),
        }
    }
}

impl LibraryRoots {
    pub fn root_for(&self, tab: LibraryTab) -> &Path {
        match tab {
            LibraryTab::Objects => &self.objects,
            LibraryTab::Materials => &self.materials,
            LibraryTab::Environments => &self.environments,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub roots: LibraryRoots,
    pub import: ImportOptions,
    pub environment: EnvironmentSettings,
    pub placeholder_image: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ApplicationError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|error| ApplicationError::Config(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ApplicationError> {
        for tab in LibraryTab::ALL {
            if self.roots.root_for(tab).as_os_str().is_empty() {
                return Err(ApplicationError::Config(format!(
                    "library root for {tab} must not be empty"
                )));
            }
        }
        self.environment.validate()?;
        Ok(())
    }
}
