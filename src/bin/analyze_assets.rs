//! Report assets whose file name is never mentioned in the project's code or text files.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use site_asset_tools::{AssetScanner, ToolConfig, logging};

#[derive(Debug, Parser)]
#[command(name = "analyze-assets", version, about)]
struct Args {
    /// Directory to scan. Defaults to the current working directory.
    #[arg(long)]
    root: Option<PathBuf>,
    /// JSON configuration file. Defaults to `asset-tools.json` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Emit debug diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let config = ToolConfig::resolve(args.config.as_deref(), &cwd)?;
    let root = args.root.unwrap_or(cwd);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    AssetScanner::new(&root, &config.scan).run(&mut out)?;
    Ok(())
}
