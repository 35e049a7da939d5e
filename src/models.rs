//! Data structures produced by the scan and patch runs.

/// Result of an unused asset scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of files classified as assets.
    pub asset_count: usize,
    /// Number of files classified as code/text.
    pub code_file_count: usize,
    /// Number of code files that could not be read.
    pub unreadable_count: usize,
    /// Root-relative paths of assets never referenced, sorted.
    pub unused_assets: Vec<String>,
}

/// Base64-encoded image ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    /// Size of the raw image in bytes.
    pub byte_len: usize,
    /// Standard (padded) base64 text of the image.
    pub encoded: String,
}

/// Terminal state of a patch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The anchor line was replaced and the HTML file rewritten.
    Replaced {
        /// One-based line number of the replaced line.
        line_number: usize,
    },
    /// No line contained the anchor; the HTML file was left untouched.
    AnchorNotFound,
}

impl PatchOutcome {
    /// Whether the HTML file was modified.
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}
