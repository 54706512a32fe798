//! Generation error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a single generation pass.
///
/// A pass fails before anything is written, so the previous output file
/// is left as it was.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("IO error when accessing `{}`", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("scan root `{}` is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("duplicate export name detected: {name} for asset {}", .path.display())]
    DuplicateExport { name: String, path: PathBuf },
}

impl GenError {
    pub fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Message followed by its causes, e.g.
    /// ``IO error when accessing `assets`: No such file or directory (os error 2)``.
    pub fn into_report(self) -> String {
        format!("{:#}", anyhow::Error::from(self))
    }
}

pub type Result<T, E = GenError> = std::result::Result<T, E>;
