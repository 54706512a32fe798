//! Extension allow-list.

use std::path::Path;

/// Ordered set of allowed extensions, each stored with its leading dot.
///
/// Matching is case-sensitive: `.PNG` does not match `.png`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(Vec<String>);

impl ExtensionSet {
    /// Parse a comma-separated list such as `jpg,png,svg`.
    ///
    /// Entries are trimmed, a leading dot is accepted, empty entries are
    /// dropped and repeated entries keep their first position.
    pub fn from_list(list: &str) -> Self {
        let mut exts: Vec<String> = Vec::new();
        for raw in list.split(',') {
            let name = raw.trim().trim_start_matches('.');
            if name.is_empty() {
                continue;
            }
            let ext = format!(".{name}");
            if !exts.contains(&ext) {
                exts.push(ext);
            }
        }
        Self(exts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.0.iter().any(|e| e == ext)
    }

    /// Whether the path's last extension is in the set.
    pub fn matches(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.contains(&ext))
    }
}

/// Last extension of a path with its leading dot (`photo.tar.gz` -> `.gz`).
///
/// Dotfiles without a further dot (`.gitignore`) have no extension.
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
}

impl std::fmt::Display for ExtensionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_list_default() {
        let set = ExtensionSet::from_list("jpg,png,svg,gif");
        assert_eq!(set.0, [".jpg", ".png", ".svg", ".gif"]);
    }

    #[test]
    fn test_from_list_cleans_entries() {
        let set = ExtensionSet::from_list(" png, .svg,,png ");
        assert_eq!(set.0, [".png", ".svg"]);
    }

    #[test]
    fn test_from_list_empty() {
        assert!(ExtensionSet::from_list("").is_empty());
        assert!(ExtensionSet::from_list(" , ,").is_empty());
    }

    #[test]
    fn test_matches_case_sensitive() {
        let set = ExtensionSet::from_list("png");
        assert!(set.matches(Path::new("/a/logo.png")));
        assert!(!set.matches(Path::new("/a/logo.PNG")));
        assert!(!set.matches(Path::new("/a/logo.png.bak")));
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of(Path::new("a/b.tar.gz")).as_deref(), Some(".gz"));
        assert_eq!(extension_of(Path::new("a/.gitignore")), None);
        assert_eq!(extension_of(Path::new("a/.hidden.svg")).as_deref(), Some(".svg"));
        assert_eq!(extension_of(Path::new("a/README")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExtensionSet::from_list("jpg,png").to_string(), ".jpg,.png");
    }
}
