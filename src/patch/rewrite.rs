//! Construction of the replacement `<img>` line.

/// Token whose position defines the indentation of the matched line.
pub const IMG_TAG_TOKEN: &str = "<img";

/// Indentation used when the matched line yields no prefix before the tag.
pub const FALLBACK_INDENT: &str = "            ";

/// Everything before the first `<img` in `line`, or [`FALLBACK_INDENT`] when that prefix
/// is empty or the tag is absent.
pub fn indentation_for(line: &str) -> &str {
  match line.find(IMG_TAG_TOKEN) {
    Some(index) if index > 0 => &line[..index],
    _ => FALLBACK_INDENT,
  }
}

/// Opening of an `<img>` tag whose `src` embeds the PNG payload, terminated by `\n`.
///
/// The tag is left open: attributes on the following lines of the original tag are kept.
pub fn build_image_line(indent: &str, encoded: &str) -> String {
  format!("{indent}<img src=\"data:image/png;base64,{encoded}\"\n")
}

/// Replacement for `line` carrying the new payload.
pub fn rewrite_line(line: &str, encoded: &str) -> String {
  build_image_line(indentation_for(line), encoded)
}
