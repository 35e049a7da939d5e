//! Recursive file discovery with directory pruning.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::{DirEntry, WalkDir};

/// Walk `root` collecting every non-directory entry, skipping any subtree whose
/// directory name is in `ignore_dirs`.
///
/// The root itself is never pruned, even when its own name is ignored. Symlinks are not
/// followed; links pointing at directories are left out of the result.
pub fn collect_files(root: &Path, ignore_dirs: &BTreeSet<String>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry, ignore_dirs));

    for entry in walker {
        let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.path_is_symlink() && entry.path().is_dir() {
            continue;
        }
        files.push(entry.into_path());
    }

    Ok(files)
}

fn is_ignored_dir(entry: &DirEntry, ignore_dirs: &BTreeSet<String>) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| ignore_dirs.contains(name))
}
