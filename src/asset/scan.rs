//! Asset scanning (pure, no side effects).

use std::fs;
use std::path::{Path, PathBuf};

use super::{AssetFile, is_hidden_name};
use crate::config::GenConfig;
use crate::error::{GenError, Result};

/// Scan the configured root for eligible assets.
///
/// Walks the tree depth-first with an explicit worklist. Entries inside a
/// directory are visited in file-name order and a subdirectory's assets are
/// listed where the subdirectory sits among its siblings:
///
/// ```text
/// root/
/// ├── a.png           -> 1
/// ├── icons/
/// │   ├── home.svg    -> 2
/// │   └── notes.txt   -> (not in allow-list)
/// ├── .cache/         -> (hidden, skipped by default)
/// └── z.gif           -> 3
/// ```
///
/// Symlinks are followed, so a directory reachable under two names is listed
/// under both. A symlink that points back at one of its own ancestors is not
/// entered again.
///
/// # Errors
///
/// Fails on the first unreadable directory, broken symlink or metadata
/// error. No partial listing is returned.
pub fn scan_assets(config: &GenConfig) -> Result<Vec<AssetFile>> {
    let root = config.root();
    let meta = fs::metadata(root).map_err(|e| GenError::fs(root, e))?;
    if !meta.is_dir() {
        return Err(GenError::NotADirectory(root.to_path_buf()));
    }

    // Canonical paths of the directories currently being walked
    let mut ancestors = vec![root.canonicalize().map_err(|e| GenError::fs(root, e))?];

    let mut results = Vec::new();
    let mut pending = children_of(root, config)?;

    while let Some(step) = pending.pop() {
        let path = match step {
            Step::Visit(path) => path,
            Step::Leave => {
                ancestors.pop();
                continue;
            }
        };

        let meta = fs::metadata(&path).map_err(|e| GenError::fs(&path, e))?;

        if meta.is_dir() {
            let canonical = path.canonicalize().map_err(|e| GenError::fs(&path, e))?;
            if ancestors.contains(&canonical) {
                crate::debug!("scan"; "skip symlink cycle: {}", path.display());
                continue;
            }
            let children = children_of(&path, config)?;
            ancestors.push(canonical);
            pending.push(Step::Leave);
            pending.extend(children);
        } else if meta.is_file() {
            let asset = AssetFile::new(path);
            if config.extensions().contains(&asset.ext) {
                results.push(asset);
            }
        }
    }

    crate::debug!("scan"; "found {} eligible files under {}", results.len(), root.display());
    Ok(results)
}

/// Worklist item. `Leave` sits below a directory's children on the stack and
/// pops once all of them are done.
enum Step {
    Visit(PathBuf),
    Leave,
}

/// Children of `dir` as worklist items, last name first so the stack pops
/// them in name order.
fn children_of(dir: &Path, config: &GenConfig) -> Result<Vec<Step>> {
    Ok(read_dir_sorted(dir, config)?
        .into_iter()
        .rev()
        .map(Step::Visit)
        .collect())
}

/// List a directory's children ordered by file name, minus hidden entries
/// when the config skips them.
fn read_dir_sorted(dir: &Path, config: &GenConfig) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| GenError::fs(dir, e))?;

    let mut children = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| GenError::fs(dir, e))?;
        if config.hidden().skips() && is_hidden_name(&entry.file_name()) {
            crate::debug!("scan"; "skip hidden: {}", entry.path().display());
            continue;
        }
        children.push(entry.path());
    }

    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(children)
}
