//! Plain-text report lines written to standard output.

use std::io::{self, Write};

use crate::models::ScanReport;

/// Tag prefixed to every unused asset line.
pub const UNUSED_TAG: &str = "[UNUSED]";

/// Counts printed before content loading starts.
pub fn write_discovery<W: Write>(out: &mut W, asset_count: usize, code_file_count: usize) -> io::Result<()> {
    writeln!(out, "Found {asset_count} assets.")?;
    writeln!(out, "Found {code_file_count} code files.")
}

/// Progress marker printed once content is loaded.
pub fn write_progress<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Scanning...")
}

/// Total followed by one tagged line per unused asset, in the report's (sorted) order.
pub fn write_unused<W: Write>(out: &mut W, report: &ScanReport) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total Unused Assets: {}", report.unused_assets.len())?;
    for asset in &report.unused_assets {
        writeln!(out, "{UNUSED_TAG} {asset}")?;
    }
    Ok(())
}
