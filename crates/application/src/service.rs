use std::path::PathBuf;

use asset_shelf_domain::{
    is_environment_map, plan_import, resolve_variant, AssetEntry, CatalogNode, ImportPlan,
    MaterialImportPlan, PreviewHandle, PreviewImage, ScanTarget,
};
use tracing::{debug, info};

use crate::{
    categories_of, scaffold_library, subcategories_of, ApplicationError,
    ApplyEnvironmentCommand, CatalogConfig, EnvironmentApplier, FolderTree, LibraryLoader,
    LibraryScanner, ListAssetsQuery, ListCategoriesQuery, ListSubcategoriesQuery,
    PlanMaterialImportCommand, PlanObjectImportCommand, PreviewCache, PreviewDecoder,
    PreviewSourceQuery, RescanCommand, ResolveVariantQuery, ScaffoldLibraryCommand, ScanCache,
    DEFAULT_LAYOUT,
};

/// Owns both caches and answers every catalog query the host makes.
///
/// Not `Sync`: hosts calling from several threads must funnel requests
/// through one owner.
pub struct CatalogService {
    config: CatalogConfig,
    scanner: Box<dyn LibraryScanner>,
    folders: Box<dyn FolderTree>,
    loader: Box<dyn LibraryLoader>,
    environment: Box<dyn EnvironmentApplier>,
    previews: PreviewCache,
    scans: ScanCache,
}

impl CatalogService {
    pub fn new(
        config: CatalogConfig,
        scanner: Box<dyn LibraryScanner>,
        folders: Box<dyn FolderTree>,
        decoder: Box<dyn PreviewDecoder>,
        loader: Box<dyn LibraryLoader>,
        environment: Box<dyn EnvironmentApplier>,
    ) -> Self {
        let previews =
            PreviewCache::new(decoder).with_placeholder(config.placeholder_image.clone());
        Self {
            config,
            scanner,
            folders,
            loader,
            environment,
            previews,
            scans: ScanCache::new(),
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn list_categories(&self, query: ListCategoriesQuery) -> Vec<CatalogNode> {
        categories_of(self.folders.as_ref(), self.config.roots.root_for(query.tab))
    }

    pub fn list_subcategories(&self, query: ListSubcategoriesQuery) -> Vec<CatalogNode> {
        subcategories_of(
            self.folders.as_ref(),
            self.config.roots.root_for(query.tab),
            &query.category,
        )
    }

    /// Entries for the directory the navigation state implies. Never empty:
    /// a scan with no results is replaced by a single placeholder entry.
    pub fn list_assets(&mut self, query: ListAssetsQuery) -> Vec<AssetEntry> {
        let root = self.config.roots.root_for(query.navigation.tab);
        let target = ScanTarget::resolve(root, &query.navigation);

        let scanner = &self.scanner;
        let previews = &mut self.previews;
        let entries = self
            .scans
            .resolve(target, |target| {
                debug!(directory = %target.directory().display(), "scanning library");
                scanner.scan(target, previews)
            })
            .to_vec();

        if entries.is_empty() {
            return vec![AssetEntry::placeholder(self.previews.no_results())];
        }
        entries
    }

    pub fn rescan(&mut self, _command: RescanCommand) {
        self.scans.clear();
    }

    pub fn preview_image(&self, handle: PreviewHandle) -> Option<&PreviewImage> {
        self.previews.image(handle)
    }

    /// Source image behind the preview of an entry in the current listing.
    pub fn preview_source(&self, query: PreviewSourceQuery) -> Option<PathBuf> {
        let entry = self.scans.find(&query.key)?;
        self.previews
            .source_of(entry.preview)
            .map(|path| path.to_path_buf())
    }

    /// Library file to act on for the selection, or `None` when the
    /// selection is not a library file.
    pub fn resolve_variant(&self, query: ResolveVariantQuery) -> Option<PathBuf> {
        resolve_variant(&query.key, query.variant)
    }

    pub fn selected_environment(&self, query: PreviewSourceQuery) -> Option<PathBuf> {
        is_environment_map(&query.key).then_some(query.key)
    }

    pub fn plan_object_import(
        &self,
        command: PlanObjectImportCommand,
    ) -> Result<Option<ImportPlan>, ApplicationError> {
        let Some(library_file) = resolve_variant(&command.key, command.variant) else {
            return Ok(None);
        };

        let options = command.options.unwrap_or(self.config.import);
        let contents = self.loader.load_contents(&library_file)?;
        let plan = plan_import(&library_file, &contents, &options);
        info!(
            file = %library_file.display(),
            destination = %plan.destination,
            imported = plan.selection.names().len(),
            "object import planned"
        );
        Ok(Some(plan))
    }

    pub fn plan_material_import(
        &self,
        command: PlanMaterialImportCommand,
    ) -> Result<Option<MaterialImportPlan>, ApplicationError> {
        let Some(library_file) = resolve_variant(&command.key, command.variant) else {
            return Ok(None);
        };

        let contents = self.loader.load_contents(&library_file)?;
        Ok(Some(MaterialImportPlan {
            library_file,
            materials: contents.materials,
            assign_to_active: command.has_active_object,
        }))
    }

    /// Returns `false` when the selection is not an environment map.
    pub fn apply_environment(
        &self,
        command: ApplyEnvironmentCommand,
    ) -> Result<bool, ApplicationError> {
        if !is_environment_map(&command.key) {
            return Ok(false);
        }

        let settings = command.settings.unwrap_or(self.config.environment);
        settings.validate()?;
        self.environment.apply_environment(&command.key, &settings)?;
        info!(file = %command.key.display(), "environment applied");
        Ok(true)
    }

    pub fn scaffold_library(
        &self,
        command: ScaffoldLibraryCommand,
    ) -> Result<usize, ApplicationError> {
        scaffold_library(
            self.folders.as_ref(),
            self.config.roots.root_for(command.tab),
            DEFAULT_LAYOUT,
        )
    }
}
