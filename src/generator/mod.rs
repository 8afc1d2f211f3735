//! Icon set generation from a single source image.
//!
//! This module turns one high-resolution source image into the complete set
//! of icon artifacts a desktop application needs for packaging.
//!
//! # Produced Artifacts
//!
//! | Artifact | Count | Content |
//! |----------|-------|---------|
//! | Flat PNGs | 13 | Fixed sizes from 30x30 to 310x310 |
//! | `icon.icns` | 1 | macOS container, sizes 16-1024, largest is the base image |
//! | `icon.ico` | 1 | Windows container, sizes 16-256 ascending |
//!
//! All resampling uses Lanczos3 filtering at exact target dimensions, so a
//! non-square source is forced square rather than letterboxed.
//!
//! # Fault Isolation
//!
//! Each artifact is attempted independently. A failed flat target or a failed
//! container candidate is logged and recorded in the [`GenerationReport`]
//! without aborting the rest of the run. Only source loading and destination
//! directory creation are fatal.
//!
//! # Integration
//!
//! ```no_run
//! use iconforge::generator::{Generator, SettingsBuilder};
//!
//! # async fn example() -> iconforge::error::Result<()> {
//! let settings = SettingsBuilder::new()
//!     .source_path("app-icon.png")
//!     .dest_dir("icons")
//!     .build()?;
//!
//! let generator = Generator::new(settings)?;
//! let report = generator.generate().await?;
//!
//! for artifact in report.generated() {
//!     println!("{}: {} bytes", artifact.path.display(), artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # Ok(())
//! # }
//! ```

mod builder;
mod flat;
mod icns;
mod ico;
mod report;
mod settings;
mod source;
mod targets;

// Public re-exports
pub use builder::Generator;
pub use report::{ArtifactOutcome, GenerationReport};
pub use settings::{Settings, SettingsBuilder};
pub use source::SourceImage;
pub use targets::{
    ArtifactKind, FlatTarget, FLAT_TARGETS, ICNS_FILE_NAME, ICNS_SIZES, ICO_FILE_NAME, ICO_SIZES,
};

/// A generated artifact result containing metadata about one created file.
///
/// Returned inside [`ArtifactOutcome`]s after a generation run and used for
/// reporting and integrity verification.
///
/// # Fields
///
/// - `kind`: The artifact category (flat PNG, ICNS, ICO)
/// - `path`: Final location of the written file
/// - `sizes`: Pixel sizes contained in the file, ascending
/// - `size`: Encoded size in bytes
/// - `checksum`: SHA-256 checksum for integrity verification
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    /// The artifact category that was created.
    pub kind: ArtifactKind,

    /// Path to the written file.
    pub path: std::path::PathBuf,

    /// Pixel sizes contained in the file, ascending.
    ///
    /// Flat PNGs carry exactly one entry; containers carry one entry per
    /// embedded resolution.
    pub sizes: Vec<u32>,

    /// Encoded size of the artifact in bytes.
    pub size: u64,

    /// SHA-256 checksum of the encoded bytes.
    ///
    /// This can be published alongside the artifact for consumers to verify.
    pub checksum: String,
}

impl GeneratedArtifact {
    /// Human-readable description of the pixel sizes in this artifact.
    ///
    /// Single-size artifacts render as `32x32`; containers render as a count
    /// with the primary (largest) resolution called out.
    pub fn describe_sizes(&self) -> String {
        match self.sizes.as_slice() {
            [size] => format!("{size}x{size}"),
            sizes => {
                let primary = sizes.iter().max().copied().unwrap_or(0);
                format!("{} sizes, primary {}x{}", sizes.len(), primary, primary)
            }
        }
    }
}
