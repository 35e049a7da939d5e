//! Image loading and base64 encoding.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose};

use crate::models::EncodedImage;

/// Read the image at `path` and encode it with the standard padded alphabet.
pub fn load_encoded_image(path: &Path) -> Result<EncodedImage> {
  let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
  Ok(encode_image(&bytes))
}

/// Encode raw image bytes.
pub fn encode_image(bytes: &[u8]) -> EncodedImage {
  EncodedImage {
    byte_len: bytes.len(),
    encoded: general_purpose::STANDARD.encode(bytes),
  }
}
