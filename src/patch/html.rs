//! Line-oriented access to the HTML document being patched.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read `path` as UTF-8 and split it into lines, each keeping its own terminator.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
  let text = fs::read_to_string(path)
    .with_context(|| format!("failed to read {}", path.display()))?;
  Ok(split_lines(&text))
}

/// Split text into lines without dropping `\n` or `\r\n` terminators.
pub fn split_lines(text: &str) -> Vec<String> {
  text.split_inclusive('\n').map(str::to_string).collect()
}

/// Index of the first line containing `anchor`. Later matches are never considered.
pub fn find_anchor_line(lines: &[String], anchor: &str) -> Option<usize> {
  lines.iter().position(|line| line.contains(anchor))
}

/// Overwrite `path` with the concatenated lines.
///
/// The file is truncated and written in place; there is no temporary file.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<()> {
  fs::write(path, lines.concat()).with_context(|| format!("failed to write {}", path.display()))
}
