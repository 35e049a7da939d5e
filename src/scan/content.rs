//! Best-effort loading of code/text files into memory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Full text of every code file that could be read. Source paths are not retained.
#[derive(Debug, Default)]
pub struct ContentCache {
    texts: Vec<String>,
    unreadable: usize,
}

impl ContentCache {
    /// Read every path, skipping (and logging) files that cannot be opened or read.
    pub fn load(paths: &[PathBuf]) -> Self {
        let mut cache = Self::default();
        for path in paths {
            match read_text_lossy(path) {
                Ok(text) => cache.texts.push(text),
                Err(err) => {
                    warn!("Error reading {}: {}", path.display(), err);
                    cache.unreadable += 1;
                }
            }
        }
        debug!(
            loaded = cache.texts.len(),
            unreadable = cache.unreadable,
            "content cache populated"
        );
        cache
    }

    /// Returns `true` when `needle` occurs in at least one loaded text.
    pub fn any_contains(&self, needle: &str) -> bool {
        self.texts.iter().any(|text| text.contains(needle))
    }

    /// Number of files successfully loaded.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Whether nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Number of files that failed to load.
    pub fn unreadable(&self) -> usize {
        self.unreadable
    }
}

#[cfg(test)]
impl FromIterator<String> for ContentCache {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            texts: iter.into_iter().collect(),
            unreadable: 0,
        }
    }
}

/// Read a file as UTF-8, dropping any byte sequence that is not valid UTF-8.
pub fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(decode_dropping_invalid(&bytes))
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}
