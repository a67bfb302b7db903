use std::path::Path;

use asset_shelf_domain::{AssetEntry, ScanTarget};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanCacheEntry {
    pub target: ScanTarget,
    pub entries: Vec<AssetEntry>,
}

/// Holds the result of the most recent scan only. Any change of target
/// replaces it wholesale; there is no expiry and no partial refresh.
#[derive(Debug, Default)]
pub struct ScanCache {
    entry: Option<ScanCacheEntry>,
}

impl ScanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve<F>(&mut self, target: ScanTarget, scan: F) -> &[AssetEntry]
    where
        F: FnOnce(&ScanTarget) -> Vec<AssetEntry>,
    {
        let hit = matches!(&self.entry, Some(entry) if entry.target == target);
        if hit {
            debug!(directory = %target.directory().display(), "scan cache hit");
        } else {
            let entries = scan(&target);
            info!(
                directory = %target.directory().display(),
                entries = entries.len(),
                "scan cache replaced"
            );
            self.entry = Some(ScanCacheEntry { target, entries });
        }

        match &self.entry {
            Some(entry) => &entry.entries,
            None => &[],
        }
    }

    pub fn clear(&mut self) {
        if self.entry.take().is_some() {
            info!("scan cache cleared");
        }
    }

    pub fn current(&self) -> Option<&ScanCacheEntry> {
        self.entry.as_ref()
    }

    pub fn find(&self, key: &Path) -> Option<&AssetEntry> {
        self.entry
            .as_ref()
            .and_then(|entry| entry.entries.iter().find(|asset| asset.key == key))
    }
}
