use std::fs;
use std::path::Path;

use asset_shelf_application::{ApplicationError, CatalogConfig};
use tracing::debug;

pub fn load_config(path: &Path) -> Result<CatalogConfig, ApplicationError> {
    if !path.is_file() {
        return Err(ApplicationError::NotFound(format!(
            "config file does not exist: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path).map_err(|error| ApplicationError::Io(error.to_string()))?;
    let config = CatalogConfig::from_json_str(&raw)?;
    debug!(path = %path.display(), "catalog config loaded");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use asset_shelf_domain::LibraryTab;
    use tempfile::TempDir;

    #[test]
    fn loads_config_from_json_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("asset-shelf.json");
        fs::write(
            &path,
            r#"{ "roots": { "objects": "/library/objects" }, "placeholder_image": "/addon/empty.png" }"#,
        )
        .expect("write config");

        let config = load_config(&path).expect("config should load");
        assert_eq!(
            config.roots.root_for(LibraryTab::Objects),
            Path::new("/library/objects")
        );
        assert_eq!(
            config.placeholder_image.as_deref(),
            Some(Path::new("/addon/empty.png"))
        );
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().expect("tempdir");
        assert!(matches!(
            load_config(&dir.path().join("absent.json")),
            Err(ApplicationError::NotFound(_))
        ));
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json").expect("write config");

        assert!(matches!(load_config(&path), Err(ApplicationError::Config(_))));
    }
}
