use std::collections::BTreeSet;
use std::path::Path;

use crate::config::ScanConfig;

/// Case-insensitive lookup of a file's final extension.
#[derive(Debug, Clone)]
pub struct ExtensionSet {
    extensions: BTreeSet<String>,
}

impl ExtensionSet {
    /// Build a set from already-normalised (lower-case, dotless) extensions.
    pub fn new(extensions: BTreeSet<String>) -> Self {
        Self { extensions }
    }

    /// Returns `true` when the path's extension, lower-cased, is in the set.
    ///
    /// Dotfiles such as `.png` have no extension and never match.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .is_some_and(|ext| self.extensions.contains(&ext))
    }
}

/// Pair of independent membership tests applied to every discovered file.
#[derive(Debug, Clone)]
pub struct Classifier {
    assets: ExtensionSet,
    code: ExtensionSet,
}

impl Classifier {
    /// Build the classifier from scan configuration.
    pub fn from_config(config: &ScanConfig) -> Self {
        Self {
            assets: ExtensionSet::new(config.asset_extension_set()),
            code: ExtensionSet::new(config.code_extension_set()),
        }
    }

    /// Whether the path is an asset.
    pub fn is_asset(&self, path: &Path) -> bool {
        self.assets.matches(path)
    }

    /// Whether the path is a code/text file searched for references.
    pub fn is_code(&self, path: &Path) -> bool {
        self.code.matches(path)
    }
}
