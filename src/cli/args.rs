//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Default extension list when `--ext` is omitted.
pub const DEFAULT_EXTENSIONS: &str = "jpg,png,svg,gif";

/// Generate a module that re-exports every asset under a stable name
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Directory to scan for assets
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: PathBuf,

    /// Output file for the generated module
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub out: PathBuf,

    /// File extensions to match (comma-separated, without dots)
    #[arg(long, default_value = DEFAULT_EXTENSIONS)]
    pub ext: String,

    /// Watch the directory and regenerate on changes
    #[arg(short, long)]
    pub watch: bool,

    /// Also scan and watch entries whose name starts with a dot
    #[arg(long)]
    pub include_hidden: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_required_and_defaults() {
        let cli = Cli::try_parse_from(["assetgen", "-d", "assets", "-o", "src/assets.ts"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("assets"));
        assert_eq!(cli.out, PathBuf::from("src/assets.ts"));
        assert_eq!(cli.ext, DEFAULT_EXTENSIONS);
        assert!(!cli.watch);
        assert!(!cli.include_hidden);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "assetgen",
            "--dir",
            "assets",
            "--out",
            "gen.ts",
            "--ext",
            "webp,avif",
            "--watch",
        ])
        .unwrap();
        assert_eq!(cli.ext, "webp,avif");
        assert!(cli.watch);
    }

    #[test]
    fn test_missing_out_is_rejected() {
        assert!(Cli::try_parse_from(["assetgen", "-d", "assets"]).is_err());
    }

    #[test]
    fn test_short_watch() {
        let cli = Cli::try_parse_from(["assetgen", "-d", "a", "-o", "b.ts", "-w"]).unwrap();
        assert!(cli.watch);
    }
}
