use std::path::{Component, Path, PathBuf};

use super::types::{ChangeKind, FsEvent};
use crate::asset::{ExtensionSet, extension_of, is_hidden_name};
use crate::config::{GenConfig, HiddenPolicy};
use crate::utils::path::normalize_path;

/// Decides which filesystem changes should trigger a generation pass.
///
/// A change qualifies when its path lies under the scan root, has no hidden
/// component below the root (unless the config includes hidden entries), is
/// not the generated file itself, and names either an asset or a directory.
///
/// Moving or renaming a directory is reported once for the directory, not
/// for each file inside it, so a created or removed directory qualifies too.
/// A removed path is gone by the time it is classified; one without any
/// extension is taken to have been a directory.
pub(super) struct EventClassifier {
    /// Scan root as configured and as resolved by the filesystem.
    /// Backends may report either spelling.
    roots: Vec<PathBuf>,
    outputs: Vec<PathBuf>,
    extensions: ExtensionSet,
    hidden: HiddenPolicy,
}

impl EventClassifier {
    pub(super) fn new(config: &GenConfig) -> Self {
        Self {
            roots: both_spellings(config.root()),
            outputs: both_spellings(config.output()),
            extensions: config.extensions().clone(),
            hidden: config.hidden(),
        }
    }

    pub(super) fn qualifies(&self, event: &FsEvent) -> bool {
        let path = event.path.as_path();
        let Some(rel) = self.roots.iter().find_map(|root| path.strip_prefix(root).ok()) else {
            return false;
        };

        if self.outputs.iter().any(|out| out == path) {
            crate::debug!("watch"; "ignore generated file: {}", path.display());
            return false;
        }

        if !self.extensions.matches(path) && !is_directory_change(event) {
            return false;
        }

        if self.hidden.skips() && has_hidden_component(rel) {
            crate::debug!("watch"; "ignore hidden: {}", path.display());
            return false;
        }

        true
    }
}

/// Whether the event created or removed a directory.
fn is_directory_change(event: &FsEvent) -> bool {
    match event.kind {
        ChangeKind::Created => event.path.is_dir(),
        ChangeKind::Removed => !event.path.exists() && extension_of(&event.path).is_none(),
        ChangeKind::Modified => false,
    }
}

fn both_spellings(path: &Path) -> Vec<PathBuf> {
    let resolved = normalize_path(path);
    if resolved == path {
        vec![path.to_path_buf()]
    } else {
        vec![path.to_path_buf(), resolved]
    }
}

fn has_hidden_component(rel: &Path) -> bool {
    rel.components().any(|c| match c {
        Component::Normal(name) => is_hidden_name(name),
        _ => false,
    })
}
