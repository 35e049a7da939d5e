//! Unused asset detection for a project tree.
//!
//! The scan walks the tree, splits files into assets and code/text by extension, loads
//! every code file into memory and then flags each asset whose file name never occurs in
//! any loaded text. The submodules hold one step each so they can be tested in isolation;
//! [`AssetScanner`] wires them together and prints the report as it goes.

mod classify;
mod content;
pub mod report;
mod usage;
mod walker;

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::ScanConfig;
use crate::models::ScanReport;

pub use classify::{Classifier, ExtensionSet};
pub use content::{ContentCache, read_text_lossy};
pub use usage::{asset_basename, find_unused, is_referenced};
pub use walker::collect_files;

/// Runs one scan of a project tree.
pub struct AssetScanner<'a> {
    root: &'a Path,
    config: &'a ScanConfig,
}

impl<'a> AssetScanner<'a> {
    /// Create a scanner rooted at `root`.
    pub fn new(root: &'a Path, config: &'a ScanConfig) -> Self {
        Self { root, config }
    }

    /// Scan the tree, writing progress and the final listing to `out`.
    ///
    /// Traversal failures abort the scan. Unreadable code files are logged and skipped.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ScanReport> {
        let files = collect_files(self.root, &self.config.ignore_dir_set())?;
        debug!(root = %self.root.display(), files = files.len(), "walk complete");

        let classifier = Classifier::from_config(self.config);
        let mut assets = Vec::new();
        let mut code_files = Vec::new();
        for path in files {
            if classifier.is_asset(&path) {
                assets.push(self.relative_path(&path));
            }
            if classifier.is_code(&path) {
                code_files.push(path);
            }
        }

        report::write_discovery(out, assets.len(), code_files.len())
            .context("failed to write report")?;

        let contents = ContentCache::load(&code_files);
        report::write_progress(out).context("failed to write report")?;

        let mut unused_assets: Vec<String> = find_unused(&assets, &contents)
            .into_iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();
        unused_assets.sort();

        let report = ScanReport {
            asset_count: assets.len(),
            code_file_count: code_files.len(),
            unreadable_count: contents.unreadable(),
            unused_assets,
        };
        report::write_unused(out, &report).context("failed to write report")?;

        Ok(report)
    }

    fn relative_path(&self, path: &Path) -> PathBuf {
        path.strip_prefix(self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn scan(root: &Path) -> (ScanReport, String) {
        let config = ScanConfig::default();
        let mut out = Vec::new();
        let report = AssetScanner::new(root, &config).run(&mut out).unwrap();
        (report, String::from_utf8(out).unwrap())
    }

    #[test]
    fn flags_only_unreferenced_asset() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("logo.png"), [0u8; 4]).unwrap();
        fs::write(root.join("unused.png"), [0u8; 4]).unwrap();
        fs::write(root.join("index.html"), "<img src=\"logo.png\">").unwrap();

        let (report, output) = scan(root);
        assert_eq!(report.asset_count, 2);
        assert_eq!(report.code_file_count, 1);
        assert_eq!(report.unused_assets, vec!["unused.png".to_string()]);
        assert!(output.contains("[UNUSED] unused.png\n"));
        assert!(!output.contains("[UNUSED] logo.png"));
    }

    #[test]
    fn ignored_directories_contribute_no_assets() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("node_modules/assets")).unwrap();
        fs::write(root.join("node_modules/assets/icon.svg"), "<svg/>").unwrap();

        let (report, output) = scan(root);
        assert_eq!(report.asset_count, 0);
        assert_eq!(report.code_file_count, 0);
        assert!(output.starts_with("Found 0 assets.\nFound 0 code files.\nScanning...\n"));
        assert!(output.ends_with("Total Unused Assets: 0\n"));
    }

    #[test]
    fn code_inside_ignored_directories_does_not_count_as_usage() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("dist/bundle.js"), "load('hero.jpg')").unwrap();
        fs::write(root.join("hero.jpg"), [0u8; 2]).unwrap();

        let (report, _) = scan(root);
        assert_eq!(report.unused_assets, vec!["hero.jpg".to_string()]);
    }

    #[test]
    fn listing_is_sorted_and_count_matches_lines() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("public/b")).unwrap();
        fs::create_dir_all(root.join("public/a")).unwrap();
        for name in ["public/b/z.gif", "public/a/y.ico", "Top.PNG", "public/a/x.pdf"] {
            fs::write(root.join(name), [1u8]).unwrap();
        }

        let (report, output) = scan(root);
        let mut expected = report.unused_assets.clone();
        expected.sort();
        assert_eq!(report.unused_assets, expected);
        assert_eq!(report.unused_assets.len(), 4);
        assert_eq!(report.unused_assets[0], "Top.PNG");

        let tagged = output
            .lines()
            .filter(|line| line.starts_with(report::UNUSED_TAG))
            .count();
        assert_eq!(tagged, report.unused_assets.len());
        assert!(output.contains("Total Unused Assets: 4\n"));
    }

    #[test]
    fn nested_reference_uses_basename_only() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("public/assets/images")).unwrap();
        fs::create_dir_all(root.join("src")).unwrap();
        fs::write(root.join("public/assets/images/portrait.webp"), [0u8]).unwrap();
        fs::write(
            root.join("src/Home.tsx"),
            "const src = `/assets/images/portrait.webp`;",
        )
        .unwrap();

        let (report, _) = scan(root);
        assert!(report.unused_assets.is_empty());
    }

    #[test]
    fn missing_root_propagates_error() {
        let dir = tempdir().unwrap();
        let config = ScanConfig::default();
        let missing = dir.path().join("nope");
        let mut out = Vec::new();
        assert!(AssetScanner::new(&missing, &config).run(&mut out).is_err());
        assert!(out.is_empty());
    }
}
