//! Re-embed the logo PNG into the dashboard HTML as a base64 data URI.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use site_asset_tools::{EmbeddedImagePatcher, ToolConfig, logging};

#[derive(Debug, Parser)]
#[command(name = "fix-slogo", version, about)]
struct Args {
  /// Image to embed.
  #[arg(long)]
  image: Option<PathBuf>,
  /// HTML file patched in place.
  #[arg(long)]
  html: Option<PathBuf>,
  /// Literal text identifying the line to replace.
  #[arg(long)]
  anchor: Option<String>,
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
  let mut patch = ToolConfig::resolve(args.config.as_deref(), &cwd)?.patch;
  if let Some(image) = args.image {
    patch.image_path = image;
  }
  if let Some(html) = args.html {
    patch.html_path = html;
  }
  if let Some(anchor) = args.anchor {
    patch.anchor = anchor;
  }

  let stdout = io::stdout();
  let mut out = stdout.lock();
  EmbeddedImagePatcher::new(&patch).run(&mut out)?;
  Ok(())
}
