//! Asset file and generated entry types.

use std::path::{Path, PathBuf};

use super::ext::extension_of;
use super::ident::IdentifierPair;

/// An eligible file discovered during one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetFile {
    /// Absolute path (root joined with the entries walked to reach it)
    pub path: PathBuf,
    /// Extension with leading dot, e.g. `.png`
    pub ext: String,
}

impl AssetFile {
    pub fn new(path: PathBuf) -> Self {
        let ext = extension_of(&path).unwrap_or_default();
        Self { path, ext }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// An asset together with the identifiers derived for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    pub asset: AssetFile,
    pub ids: IdentifierPair,
}

/// Whether a file or directory name marks a hidden entry.
pub fn is_hidden_name(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}
