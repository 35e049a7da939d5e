#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod logging;
pub mod models;
pub mod patch;
pub mod scan;

pub use config::{PatchConfig, ScanConfig, ToolConfig};
pub use models::{EncodedImage, PatchOutcome, ScanReport};
pub use patch::EmbeddedImagePatcher;
pub use scan::AssetScanner;
