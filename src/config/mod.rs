//! Generation configuration.
//!
//! Built once from the command line and then passed by reference into every
//! stage of a generation pass. Nothing here is global, so tests build a
//! `GenConfig` for a temporary directory and run the pipeline against it.

mod error;

use std::path::{Path, PathBuf};

use crate::asset::ExtensionSet;
use crate::cli::Cli;
use crate::utils::path::absolutize;

pub use error::ConfigError;

/// Whether entries whose name starts with `.` take part in a pass.
///
/// One policy governs both the full directory scan and the watcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HiddenPolicy {
    #[default]
    Skip,
    Include,
}

impl HiddenPolicy {
    pub fn skips(self) -> bool {
        self == Self::Skip
    }
}

/// Immutable settings for every generation pass of one process.
#[derive(Debug, Clone)]
pub struct GenConfig {
    /// Scan root (absolute)
    root: PathBuf,
    /// Generated module path (absolute)
    output: PathBuf,
    extensions: ExtensionSet,
    hidden: HiddenPolicy,
    watch: bool,
}

impl GenConfig {
    /// Create a config, absolutizing both paths.
    pub fn new(root: &Path, output: &Path, extensions: ExtensionSet) -> Self {
        Self {
            root: absolutize(root),
            output: absolutize(output),
            extensions,
            hidden: HiddenPolicy::default(),
            watch: false,
        }
    }

    /// Build and validate the config from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let extensions = ExtensionSet::from_list(&cli.ext);
        if extensions.is_empty() {
            return Err(ConfigError::EmptyExtensions(cli.ext.clone()));
        }

        let config = Self::new(&cli.dir, &cli.out, extensions)
            .with_hidden(if cli.include_hidden {
                HiddenPolicy::Include
            } else {
                HiddenPolicy::Skip
            })
            .with_watch(cli.watch);

        if config.output.file_name().is_none() {
            return Err(ConfigError::OutputNotAFile(cli.out.display().to_string()));
        }

        Ok(config)
    }

    pub fn with_hidden(mut self, hidden: HiddenPolicy) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_watch(mut self, watch: bool) -> Self {
        self.watch = watch;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Directory that import specifiers are relative to.
    pub fn output_dir(&self) -> &Path {
        self.output.parent().unwrap_or(&self.output)
    }

    pub fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }

    pub fn hidden(&self) -> HiddenPolicy {
        self.hidden
    }

    pub fn watch(&self) -> bool {
        self.watch
    }
}
