//! Generated module rendering.
//!
//! # Module Format
//!
//! ```text
//! import LOGO from "./assets/logo.png";
//! import ICONS_HOME from "./assets/icons/home.svg";
//! export const I_LOGO = LOGO;
//! export const I_ICONS_HOME = ICONS_HOME;
//! ```
//!
//! Imports come first, exports second, both in discovery order. Lines are
//! joined with `\n` and the file has no trailing newline, so an empty asset
//! set produces an empty file.

use std::fs;
use std::path::Path;

use crate::asset::AssetEntry;
use crate::error::{GenError, Result};
use crate::utils::path::{relative_to, to_slash};

/// Rendered module content, ready to be written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedModule {
    imports: Vec<String>,
    exports: Vec<String>,
}

impl GeneratedModule {
    /// Build import/export lines for collision-free entries.
    ///
    /// Import specifiers are relative to `output_dir`, the directory the
    /// generated file lives in.
    pub fn build(entries: &[AssetEntry], output_dir: &Path) -> Self {
        let mut module = Self {
            imports: Vec::with_capacity(entries.len()),
            exports: Vec::with_capacity(entries.len()),
        };

        for entry in entries {
            let specifier = import_specifier(output_dir, entry.asset.path());
            module
                .imports
                .push(format!("import {} from \"{}\";", entry.ids.import_alias, specifier));
            module.exports.push(format!(
                "export const {} = {};",
                entry.ids.export_name, entry.ids.import_alias
            ));
        }

        module
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    /// Module text: all imports, then all exports.
    pub fn render(&self) -> String {
        self.imports
            .iter()
            .chain(&self.exports)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Overwrite `output` with the rendered module.
    ///
    /// The parent directory must already exist.
    pub fn write(&self, output: &Path) -> Result<()> {
        fs::write(output, self.render()).map_err(|e| GenError::fs(output, e))
    }
}

/// Forward-slash import path from `output_dir` to `asset`.
///
/// Paths inside or below the output directory get a `./` prefix; paths that
/// climb out of it start with `../` and are left as they are.
pub fn import_specifier(output_dir: &Path, asset: &Path) -> String {
    let rel = to_slash(&relative_to(output_dir, asset));
    if rel.starts_with("../") {
        rel
    } else {
        format!("./{rel}")
    }
}
