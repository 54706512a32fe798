//! Path normalization utilities.
//!
//! - `absolutize` - lexical absolute path (cwd join, `.`/`..` folded)
//! - `normalize_path` - canonicalize with lexical fallback
//! - `relative_to` - lexical relative path between two absolute paths

use std::path::{Component, Path, PathBuf};

/// Make a path absolute without touching the filesystem.
///
/// Relative paths are joined onto the current directory. `.` components are
/// dropped and `..` pops the previous normal component. Symlinks are not
/// resolved, so the result keeps the spelling the user passed in.
///
/// # Example
/// ```ignore
/// // cwd = /work
/// assert_eq!(absolutize(Path::new("./assets/../out.ts")), PathBuf::from("/work/out.ts"));
/// ```
pub fn absolutize(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
    };
    clean(&joined)
}

/// Fold `.` and `..` components lexically.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`) and falls
/// back to [`absolutize`] when the path does not exist.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| absolutize(path))
}

/// Compute the path of `target` relative to the directory `base`.
///
/// Both paths are expected to be absolute and already cleaned. The result
/// uses `..` for every component of `base` not shared with `target`.
///
/// # Example
/// ```ignore
/// let rel = relative_to(Path::new("/a/out"), Path::new("/a/img/x.png"));
/// assert_eq!(rel, PathBuf::from("../img/x.png"));
/// ```
pub fn relative_to(base: &Path, target: &Path) -> PathBuf {
    let base: Vec<_> = base.components().collect();
    let target: Vec<_> = target.components().collect();

    let shared = base
        .iter()
        .zip(&target)
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in shared..base.len() {
        rel.push("..");
    }
    for component in &target[shared..] {
        rel.push(component.as_os_str());
    }
    rel
}

/// Render a relative path with forward slashes regardless of platform.
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
