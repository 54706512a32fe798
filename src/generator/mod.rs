//! Generation pass.
//!
//! One pass runs every stage in order and stops at the first error:
//!
//! ```text
//! scan_assets → derive (per file) → collision check → GeneratedModule → write
//! ```
//!
//! Nothing is written unless every earlier stage succeeded, so a failed pass
//! leaves the previous output file untouched.

pub mod module;

use std::path::PathBuf;

use crate::asset::{AssetEntry, check_unique, derive, scan_assets};
use crate::config::GenConfig;
use crate::error::Result;

pub use module::GeneratedModule;

/// Outcome of a successful pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub assets: usize,
}

/// Scan, name and check every asset without writing anything.
pub fn collect_entries(config: &GenConfig) -> Result<Vec<AssetEntry>> {
    let entries = scan_assets(config)?
        .into_iter()
        .map(|asset| AssetEntry {
            ids: derive(config.root(), asset.path()),
            asset,
        })
        .collect();

    check_unique(entries)
}

/// Run one full generation pass and overwrite the output file.
pub fn generate(config: &GenConfig) -> Result<GenerateReport> {
    let entries = collect_entries(config)?;
    let module = GeneratedModule::build(&entries, config.output_dir());
    module.write(config.output())?;

    crate::debug!("gen"; "wrote {} lines to {}", module.len() * 2, config.output().display());

    Ok(GenerateReport {
        output: config.output().to_path_buf(),
        assets: module.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::ExtensionSet;
    use crate::error::GenError;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "fake").unwrap();
    }

    fn setup() -> (TempDir, GenConfig) {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("assets");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        let config = GenConfig::new(
            &root,
            &dir.path().join("src/assets.ts"),
            ExtensionSet::from_list("jpg,png,svg,gif"),
        );
        (dir, config)
    }

    #[test]
    fn test_generate_full_module() {
        let (dir, config) = setup();
        let root = dir.path().join("assets");
        touch(&root.join("logo.png"));
        touch(&root.join("icons/home.svg"));
        touch(&root.join("icons/readme.txt"));

        let report = generate(&config).unwrap();
        assert_eq!(report.assets, 2);
        assert_eq!(report.output, config.output());

        let content = fs::read_to_string(config.output()).unwrap();
        assert_eq!(
            content,
            "import ICONS_HOME from \"../assets/icons/home.svg\";\n\
             import LOGO from \"../assets/logo.png\";\n\
             export const I_ICONS_HOME = ICONS_HOME;\n\
             export const I_LOGO = LOGO;"
        );
    }

    #[test]
    fn test_generate_is_deterministic() {
        let (dir, config) = setup();
        let root = dir.path().join("assets");
        for name in ["b.png", "a.gif", "c/d.svg", "c/a.jpg", "e/f/g.png"] {
            touch(&root.join(name));
        }

        generate(&config).unwrap();
        let first = fs::read(config.output()).unwrap();
        generate(&config).unwrap();
        let second = fs::read(config.output()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_every_asset_once() {
        let (dir, config) = setup();
        let root = dir.path().join("assets");
        let names = ["a.png", "x/y.jpg", "x/z/w.gif", "q.svg"];
        for name in names {
            touch(&root.join(name));
        }

        generate(&config).unwrap();
        let content = fs::read_to_string(config.output()).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), names.len() * 2);
        for name in names {
            let needle = format!("/assets/{name}\";");
            assert_eq!(content.matches(&needle).count(), 1, "{name}");
        }
        assert_eq!(lines.iter().filter(|l| l.starts_with("import ")).count(), 4);
        assert_eq!(lines.iter().filter(|l| l.starts_with("export const ")).count(), 4);
    }

    #[test]
    fn test_generate_duplicate_writes_nothing() {
        let (dir, config) = setup();
        let root = dir.path().join("assets");
        touch(&root.join("icons/Home.svg"));
        touch(&root.join("icons/home.svg"));

        match generate(&config) {
            Err(GenError::DuplicateExport { name, path }) => {
                assert_eq!(name, "I_ICONS_HOME");
                assert_eq!(path, config.root().join("icons/home.svg"));
            }
            other => panic!("expected duplicate error, got {other:?}"),
        }
        assert!(!config.output().exists());
    }

    #[test]
    fn test_generate_failure_keeps_previous_output() {
        let (dir, config) = setup();
        let root = dir.path().join("assets");
        touch(&root.join("a/b.png"));
        generate(&config).unwrap();
        let before = fs::read(config.output()).unwrap();

        touch(&root.join("a_b.png"));
        assert!(generate(&config).is_err());
        assert_eq!(fs::read(config.output()).unwrap(), before);
    }

    #[test]
    fn test_generate_empty_tree() {
        let (_dir, config) = setup();
        let report = generate(&config).unwrap();
        assert_eq!(report.assets, 0);
        assert_eq!(fs::read_to_string(config.output()).unwrap(), "");
    }

    #[test]
    fn test_generate_missing_root() {
        let dir = TempDir::new().unwrap();
        let config = GenConfig::new(
            &dir.path().join("nope"),
            &dir.path().join("gen.ts"),
            ExtensionSet::from_list("png"),
        );
        assert!(matches!(generate(&config), Err(GenError::Filesystem { .. })));
        assert!(!config.output().exists());
    }

    #[test]
    fn test_failure_report_names_os_reason() {
        let dir = TempDir::new().unwrap();
        let config = GenConfig::new(
            &dir.path().join("nope"),
            &dir.path().join("gen.ts"),
            ExtensionSet::from_list("png"),
        );
        let report = generate(&config).unwrap_err().into_report();
        assert!(report.contains("nope"));
        assert!(report.contains("os error"), "missing cause: {report}");
    }

    #[test]
    fn test_output_inside_root() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("a");
        touch(&root.join("img/x.png"));
        fs::create_dir_all(root.join("out")).unwrap();
        let config = GenConfig::new(
            &root,
            &root.join("out/generated.ts"),
            ExtensionSet::from_list("png"),
        );

        generate(&config).unwrap();
        assert_eq!(
            fs::read_to_string(config.output()).unwrap(),
            "import IMG_X from \"../img/x.png\";\nexport const I_IMG_X = IMG_X;"
        );
    }
}
