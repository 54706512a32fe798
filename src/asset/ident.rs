//! Identifier derivation.
//!
//! An asset path relative to the scan root is flattened into one
//! upper-case identifier:
//!
//! ```text
//! root/a/b.png           -> A_B          / I_A_B
//! root/icons/arrow-up.svg -> ICONS_ARROW_UP / I_ICONS_ARROW_UP
//! root/logo.png          -> LOGO         / I_LOGO
//! ```
//!
//! The mapping is lossy: case and any non-alphanumeric character collapse,
//! so different paths can produce the same identifier. Those cases are
//! caught by [`super::collision`].

use std::path::{Component, Path};

/// Prefix for exported names.
pub const EXPORT_PREFIX: &str = "I_";

/// Names derived from one asset path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentifierPair {
    /// Binding name used inside the generated module
    pub import_alias: String,
    /// Public name, `I_` + alias
    pub export_name: String,
}

/// Derive the identifier pair for `path` relative to `root`.
///
/// Pure function: the filesystem is never consulted.
pub fn derive(root: &Path, path: &Path) -> IdentifierPair {
    let import_alias = identifier(&flatten(root, path));
    let export_name = format!("{EXPORT_PREFIX}{import_alias}");
    IdentifierPair {
        import_alias,
        export_name,
    }
}

/// Join the relative directory segments and the extension-less file name
/// with `_`.
fn flatten(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);

    let mut segments: Vec<String> = rel
        .parent()
        .map(|dir| {
            dir.components()
                .filter_map(|c| match c {
                    Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                    Component::ParentDir => Some("..".to_string()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    if let Some(stem) = rel.file_stem() {
        segments.push(stem.to_string_lossy().into_owned());
    }

    segments.join("_")
}

/// Replace every char outside `[A-Za-z0-9]` with `_` and upper-case the rest.
fn identifier(flat: &str) -> String {
    flat.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(root: &str, path: &str) -> (String, String) {
        let ids = derive(Path::new(root), Path::new(path));
        (ids.import_alias, ids.export_name)
    }

    #[test]
    fn test_nested_path() {
        assert_eq!(pair("/root", "/root/a/b.png"), ("A_B".to_string(), "I_A_B".to_string()));
    }

    #[test]
    fn test_top_level_file() {
        assert_eq!(pair("/root", "/root/logo.svg"), ("LOGO".to_string(), "I_LOGO".to_string()));
    }

    #[test]
    fn test_non_alphanumeric_replaced() {
        assert_eq!(
            pair("/root", "/root/icons/arrow-up@2x.png").1,
            "I_ICONS_ARROW_UP_2X"
        );
        assert_eq!(pair("/root", "/root/my photos/été.jpg").0, "MY_PHOTOS__T_");
    }

    #[test]
    fn test_only_last_extension_stripped() {
        assert_eq!(pair("/root", "/root/archive.min.svg").0, "ARCHIVE_MIN");
    }

    #[test]
    fn test_hidden_name() {
        assert_eq!(pair("/root", "/root/.logo.png").0, "_LOGO");
    }

    #[test]
    fn test_case_collision() {
        assert_eq!(
            pair("/root", "/root/icons/Home.svg"),
            pair("/root", "/root/icons/home.svg")
        );
    }

    #[test]
    fn test_separator_collision() {
        assert_eq!(
            pair("/root", "/root/a/b.png").1,
            pair("/root", "/root/a_b.png").1
        );
    }

    #[test]
    fn test_relative_root() {
        assert_eq!(pair("assets", "assets/img/x.png").0, "IMG_X");
    }

    #[test]
    fn test_deterministic() {
        let a = derive(Path::new("/r"), Path::new("/r/x/y/z.gif"));
        let b = derive(Path::new("/r"), Path::new("/r/x/y/z.gif"));
        assert_eq!(a, b);
    }
}
