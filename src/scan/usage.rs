use std::path::Path;

use super::content::ContentCache;

/// Last path segment of an asset path, including its extension.
pub fn asset_basename(asset: &Path) -> Option<String> {
    asset
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// An asset counts as used when its basename appears verbatim in any loaded text.
///
/// This is a plain substring test: comments, URLs and unrelated prose all count.
pub fn is_referenced(asset: &Path, contents: &ContentCache) -> bool {
    match asset_basename(asset) {
        Some(name) => contents.any_contains(&name),
        None => false,
    }
}

/// Filter `assets` down to the ones never mentioned, preserving input order.
pub fn find_unused<'a, P>(assets: &'a [P], contents: &ContentCache) -> Vec<&'a P>
where
    P: AsRef<Path>,
{
    assets
        .iter()
        .filter(|asset| {
            let path: &Path = (*asset).as_ref();
            !is_referenced(path, contents)
        })
        .collect()
}
