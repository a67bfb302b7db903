pub mod config;
pub mod fs;

pub use config::load_config;
pub use fs::{FsFolderTree, ImageCrateDecoder, WalkdirLibraryScanner, THUMBNAIL_SIZE};

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use asset_shelf_application::{
        ApplicationError, CatalogConfig, CatalogService, EnvironmentApplier, LibraryLoader,
        LibraryRoots, ListAssetsQuery, ListCategoriesQuery, ListSubcategoriesQuery,
        PreviewSourceQuery, ResolveVariantQuery,
    };
    use asset_shelf_domain::{
        CatalogNode, CategorySelection, EnvironmentSettings, LibraryContents, LibraryTab,
        NavigationState, PreviewHandle, PrimaryFile, RenderVariant, SubcategorySelection,
    };
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    use super::*;

    struct NoLoader;

    impl LibraryLoader for NoLoader {
        fn load_contents(&self, _library_file: &Path) -> Result<LibraryContents, ApplicationError> {
            Ok(LibraryContents::default())
        }
    }

    struct NoEnvironment;

    impl EnvironmentApplier for NoEnvironment {
        fn apply_environment(
            &self,
            _environment_map: &Path,
            _settings: &EnvironmentSettings,
        ) -> Result<(), ApplicationError> {
            Ok(())
        }
    }

    fn service(root: &Path) -> CatalogService {
        let config = CatalogConfig {
            roots: LibraryRoots {
                objects: root.to_path_buf(),
                materials: root.join("Materials"),
                environments: root.join("HDRI"),
            },
            ..CatalogConfig::default()
        };
        CatalogService::new(
            config,
            Box::new(WalkdirLibraryScanner),
            Box::new(FsFolderTree),
            Box::new(ImageCrateDecoder),
            Box::new(NoLoader),
            Box::new(NoEnvironment),
        )
    }

    fn seed_red_chair(root: &Path) -> PathBuf {
        let red = root.join("Seating/Chairs/RedChair");
        fs::create_dir_all(&red).expect("mkdir");
        fs::write(red.join("RedChair_Cycles.blend"), b"blend").expect("write");
        fs::write(red.join("RedChair_Corona.blend"), b"blend").expect("write");
        ImageBuffer::from_fn(32, 32, |_x, _y| Rgb([120_u8, 0_u8, 0_u8]))
            .save(red.join("preview.png"))
            .expect("save png");
        red
    }

    #[test]
    fn browse_chairs_and_switch_variant() {
        let dir = TempDir::new().expect("tempdir");
        let red = seed_red_chair(dir.path());
        let mut catalog = service(dir.path());

        let mut navigation = NavigationState::new(LibraryTab::Objects);
        navigation.select_category(CategorySelection::Named("Seating".to_string()));
        navigation.select_subcategory(SubcategorySelection::Named("Chairs".to_string()));
        let entries = catalog.list_assets(ListAssetsQuery {
            navigation: navigation.clone(),
        });

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].display_name, "RedChair");
        assert!(matches!(entries[0].primary_file, PrimaryFile::Library(_)));
        assert!(catalog.preview_image(entries[0].preview).is_some());
        assert_eq!(
            catalog.preview_source(PreviewSourceQuery {
                key: entries[0].key.clone(),
            }),
            Some(red.join("preview.png"))
        );

        let corona = catalog
            .resolve_variant(ResolveVariantQuery {
                key: entries[0].key.clone(),
                variant: RenderVariant::Corona,
            })
            .expect("library file");
        assert!(corona.ends_with("RedChair_Corona.blend"));

        navigation.render_variant = RenderVariant::Cycles;
        let again = catalog.list_assets(ListAssetsQuery { navigation });
        assert_eq!(again, entries);
    }

    #[test]
    fn empty_category_shows_wildcard_and_placeholder() {
        let dir = TempDir::new().expect("tempdir");
        seed_red_chair(dir.path());
        fs::create_dir_all(dir.path().join("Lighting")).expect("mkdir");
        let mut catalog = service(dir.path());

        let categories = catalog.list_categories(ListCategoriesQuery {
            tab: LibraryTab::Objects,
        });
        let names: Vec<&str> = categories.iter().map(|node| node.name.as_str()).collect();
        assert_eq!(names, vec!["All", "Lighting", "Seating"]);

        let subcategories = catalog.list_subcategories(ListSubcategoriesQuery {
            tab: LibraryTab::Objects,
            category: CategorySelection::Named("Lighting".to_string()),
        });
        assert_eq!(subcategories, vec![CatalogNode::all()]);

        let mut navigation = NavigationState::new(LibraryTab::Objects);
        navigation.select_category(CategorySelection::Named("Lighting".to_string()));
        let entries = catalog.list_assets(ListAssetsQuery { navigation });

        assert_eq!(entries.len(), 1);
        assert!(entries[0].is_placeholder());
        assert_eq!(entries[0].preview, PreviewHandle::NO_RESULTS);
    }

    #[test]
    fn whole_library_listing_flattens_every_category() {
        let dir = TempDir::new().expect("tempdir");
        seed_red_chair(dir.path());
        let lamp = dir.path().join("Lighting/Desk lamps/Lamp");
        fs::create_dir_all(&lamp).expect("mkdir");
        fs::write(lamp.join("Lamp.blend"), b"blend").expect("write");
        ImageBuffer::from_fn(8, 8, |_x, _y| Rgb([0_u8, 0_u8, 90_u8]))
            .save(lamp.join("lamp.jpg"))
            .expect("save jpg");
        let mut catalog = service(dir.path());

        let entries = catalog.list_assets(ListAssetsQuery {
            navigation: NavigationState::new(LibraryTab::Objects),
        });

        let names: Vec<&str> = entries.iter().map(|entry| entry.display_name.as_str()).collect();
        assert_eq!(names, vec!["Lamp", "RedChair"]);
        assert_eq!(entries[1].ordinal, 1);
    }

    #[test]
    fn missing_root_is_tolerated() {
        let dir = TempDir::new().expect("tempdir");
        let mut catalog = service(&dir.path().join("not-there"));

        assert_eq!(
            catalog.list_categories(ListCategoriesQuery {
                tab: LibraryTab::Objects,
            }),
            vec![CatalogNode::all()]
        );
        let entries = catalog.list_assets(ListAssetsQuery {
            navigation: NavigationState::new(LibraryTab::Environments),
        });
        assert!(entries[0].is_placeholder());
    }
}
