//! Duplicate export name detection.

use std::path::Path;

use rustc_hash::FxHashSet;

use super::AssetEntry;
use crate::error::{GenError, Result};

/// Export names claimed so far in one generation pass.
#[derive(Debug, Default)]
pub struct ExportRegistry {
    claimed: FxHashSet<String>,
}

impl ExportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `name` for `path`, failing if an earlier asset already owns it.
    pub fn claim(&mut self, name: &str, path: &Path) -> Result<()> {
        if self.claimed.contains(name) {
            return Err(GenError::DuplicateExport {
                name: name.to_string(),
                path: path.to_path_buf(),
            });
        }
        self.claimed.insert(name.to_string());
        Ok(())
    }
}

/// Check a whole pass in discovery order.
///
/// Returns the entries unchanged when every export name is unique, or the
/// first duplicate together with the path that repeated it.
pub fn check_unique(entries: Vec<AssetEntry>) -> Result<Vec<AssetEntry>> {
    let mut registry = ExportRegistry::new();
    for entry in &entries {
        registry.claim(&entry.ids.export_name, entry.asset.path())?;
    }
    Ok(entries)
}
