//! In-place re-embedding of the logo image into the dashboard HTML.
//!
//! A run reads the image, reads the HTML, looks for the first line holding the anchor,
//! swaps it for a fresh `<img src="data:...">` line and rewrites the file. When no line
//! matches, the file is not touched and [`PatchOutcome::AnchorNotFound`] is returned.
//! Read errors surface before any write happens.

pub mod html;
pub mod image;
pub mod rewrite;

use std::io::Write;

use anyhow::{Context, Result, ensure};
use tracing::debug;

use crate::config::PatchConfig;
use crate::models::PatchOutcome;

pub use html::{find_anchor_line, read_lines, split_lines, write_lines};
pub use image::{encode_image, load_encoded_image};
pub use rewrite::{FALLBACK_INDENT, build_image_line, indentation_for, rewrite_line};

/// Runs the embedded logo patch for one HTML file.
pub struct EmbeddedImagePatcher<'a> {
  config: &'a PatchConfig,
}

impl<'a> EmbeddedImagePatcher<'a> {
  /// Create a patcher for the configured image, document and anchor.
  pub fn new(config: &'a PatchConfig) -> Self {
    Self { config }
  }

  /// Perform the patch, writing progress lines to `out`.
  pub fn run<W: Write>(&self, out: &mut W) -> Result<PatchOutcome> {
    let PatchConfig {
      image_path,
      html_path,
      anchor,
    } = self.config;
    ensure!(!anchor.is_empty(), "anchor pattern must not be empty");

    writeln!(out, "Reading image from {}...", image_path.display())?;
    let image = load_encoded_image(image_path)?;
    writeln!(out, "Image size: {} bytes", image.byte_len)?;
    writeln!(out, "Encoded string length: {}", image.encoded.len())?;

    writeln!(out, "Reading HTML from {}...", html_path.display())?;
    let mut lines = read_lines(html_path)?;
    debug!(lines = lines.len(), "html loaded");

    let Some(index) = find_anchor_line(&lines, anchor) else {
      writeln!(
        out,
        "Target line not found in HTML. Please verify the search pattern."
      )?;
      return Ok(PatchOutcome::AnchorNotFound);
    };

    let line_number = index + 1;
    writeln!(out, "Found target line at index {line_number}")?;
    lines[index] = rewrite_line(&lines[index], &image.encoded);

    write_lines(html_path, &lines)
      .with_context(|| format!("failed to patch line {line_number}"))?;
    writeln!(out, "Successfully replaced slogo base64 in HTML.")?;

    Ok(PatchOutcome::Replaced { line_number })
  }
}
