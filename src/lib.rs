//! # iconforge
//!
//! Application icon set generation from a single source image.
//!
//! Given one high-resolution source image, this crate produces the complete
//! icon set a desktop application needs for packaging: thirteen fixed-size
//! flat PNGs, a multi-resolution macOS ICNS container, and a multi-resolution
//! Windows ICO container, all resampled with Lanczos filtering.
//!
//! ## Features
//!
//! - **Single decode**: the source image is decoded once and resampled per target
//! - **Exact dimensions**: every output is forced to its exact square size
//! - **Fault isolation**: one failed artifact never aborts the remaining ones
//! - **Structured reporting**: per-artifact outcomes with size and SHA-256 checksum
//!
//! ## Usage
//!
//! ```bash
//! iconforge generate app-icon.png --output icons   # Write the full icon set
//! iconforge generate app-icon.png --only ico       # Only the ICO container
//! iconforge preview app-icon.png                   # Show the plan, write nothing
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod generator;

// Re-export main types for public API
pub use cli::Args;
pub use error::{Error, Result};
pub use generator::{
    ArtifactKind, ArtifactOutcome, FlatTarget, GeneratedArtifact, GenerationReport, Generator,
    Settings, SettingsBuilder, SourceImage, FLAT_TARGETS, ICNS_FILE_NAME, ICNS_SIZES,
    ICO_FILE_NAME, ICO_SIZES,
};
