//! Tool configuration describing the scan sets and the patch targets.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// File name searched for in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "asset-tools.json";

const DEFAULT_ASSET_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "webp", "glb", "mp4", "mov", "pdf", "ico",
];
const DEFAULT_CODE_EXTENSIONS: &[&str] = &[
    "js", "jsx", "ts", "tsx", "html", "css", "json", "md", "scss", "less",
];
const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    ".agent",
    ".gemini",
    ".vscode",
];

/// Anchor identifying the line holding the previously embedded logo.
pub const DEFAULT_SLOGO_ANCHOR: &str =
    "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAACEAAAAmCAYAAABK4f";

/// Top-level configuration shared by both binaries.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// Settings for the unused asset scan.
    pub scan: ScanConfig,
    /// Settings for the embedded logo patch.
    pub patch: PatchConfig,
}

/// Extension and directory sets driving the asset scan.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extensions classified as assets.
    pub asset_extensions: Vec<String>,
    /// Extensions whose contents are searched for asset references.
    pub code_extensions: Vec<String>,
    /// Directory names pruned from the walk wherever they appear.
    pub ignore_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            asset_extensions: owned(DEFAULT_ASSET_EXTENSIONS),
            code_extensions: owned(DEFAULT_CODE_EXTENSIONS),
            ignore_dirs: owned(DEFAULT_IGNORE_DIRS),
        }
    }
}

impl ScanConfig {
    /// Asset extensions, lower-cased and without leading dots.
    pub fn asset_extension_set(&self) -> BTreeSet<String> {
        normalise_extensions(&self.asset_extensions)
    }

    /// Code/text extensions, lower-cased and without leading dots.
    pub fn code_extension_set(&self) -> BTreeSet<String> {
        normalise_extensions(&self.code_extensions)
    }

    /// Ignored directory names. Matching is exact and case-sensitive.
    pub fn ignore_dir_set(&self) -> BTreeSet<String> {
        self.ignore_dirs
            .iter()
            .map(|value| value.trim().trim_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .collect()
    }
}

/// Locations and anchor used when re-embedding the logo into the dashboard page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PatchConfig {
    /// PNG file whose bytes are embedded.
    pub image_path: PathBuf,
    /// HTML file patched in place.
    pub html_path: PathBuf,
    /// Literal text identifying the line to replace.
    pub anchor: String,
}

impl Default for PatchConfig {
    fn default() -> Self {
        Self {
            image_path: PathBuf::from("public/assets/images/ora-web/slogo.png"),
            html_path: PathBuf::from("public/dashboard_refactor.html"),
            anchor: DEFAULT_SLOGO_ANCHOR.into(),
        }
    }
}

impl ToolConfig {
    /// Look for [`DEFAULT_CONFIG_FILE`] in `dir`, falling back to defaults when the file is
    /// absent or cannot be parsed.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file, discarding any error.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Read configuration from a file the user asked for explicitly.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Resolve the configuration for a binary: an explicit file if given, else discovery in `dir`.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Ok(Self::discover(dir)),
        }
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn normalise_extensions(values: &[String]) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| value.trim().trim_start_matches('.').to_lowercase())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_builtin_sets() {
        let config = ScanConfig::default();
        let assets = config.asset_extension_set();
        assert_eq!(assets.len(), 11);
        assert!(assets.contains("glb"));
        assert!(config.code_extension_set().contains("scss"));
        assert!(config.ignore_dir_set().contains("node_modules"));
    }

    #[test]
    fn normalises_extension_lists() {
        let config = ScanConfig {
            asset_extensions: vec![".PNG".into(), " jpg ".into(), "".into(), "png".into()],
            ..ScanConfig::default()
        };
        let set = config.asset_extension_set();
        assert_eq!(
            set.into_iter().collect::<Vec<_>>(),
            vec!["jpg".to_string(), "png".to_string()]
        );
    }

    #[test]
    fn discover_falls_back_when_file_missing() {
        let dir = tempdir().unwrap();
        let config = ToolConfig::discover(dir.path());
        assert_eq!(config.patch.anchor, DEFAULT_SLOGO_ANCHOR);
    }

    #[test]
    fn discover_reads_partial_file() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "scan": { "ignore_dirs": ["vendor"] }, "patch": { "html_path": "site/index.html" } }"#,
        )
        .unwrap();

        let config = ToolConfig::discover(dir.path());
        assert_eq!(config.scan.ignore_dirs, vec!["vendor".to_string()]);
        assert_eq!(config.scan.asset_extensions.len(), 11);
        assert_eq!(config.patch.html_path, PathBuf::from("site/index.html"));
        assert_eq!(
            config.patch.image_path,
            PathBuf::from("public/assets/images/ora-web/slogo.png")
        );
    }

    #[test]
    fn discover_ignores_malformed_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "{ not json").unwrap();
        let config = ToolConfig::discover(dir.path());
        assert_eq!(config.scan.ignore_dirs.len(), 6);
    }

    #[test]
    fn explicit_load_reports_parse_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("custom.json");
        fs::write(&path, "42").unwrap();
        let err = ToolConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
