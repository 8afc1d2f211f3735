//! Generation orchestration and coordination.
//!
//! This module provides the main [`Generator`] orchestrator that runs the
//! flat PNG, ICNS, and ICO passes over the loaded source image.
//!
//! # Overview
//!
//! The generator:
//! 1. Reads configuration from [`Settings`]
//! 2. Loads and decodes the source image once
//! 3. Determines which artifact kinds to produce
//! 4. Delegates to the per-kind pass modules
//! 5. Returns a [`GenerationReport`] of per-artifact outcomes
//!
//! # Example
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
//!     println!("Created: {} ({} bytes)", artifact.path.display(), artifact.size);
//!     println!("SHA256: {}", artifact.checksum);
//! }
//! # Ok(())
//! # }
//! ```

use crate::error::{ErrorExt, Result};
use crate::generator::report::GenerationReport;
use crate::generator::settings::Settings;
use crate::generator::source::SourceImage;
use crate::generator::targets::{ArtifactKind, FLAT_TARGETS, ICNS_SIZES, ICO_SIZES};
use crate::generator::{flat, icns, ico};

/// Main generation orchestrator.
///
/// Holds the settings and the decoded source image; a run resamples the
/// source per target and writes every artifact into the destination
/// directory.
#[derive(Debug)]
pub struct Generator {
    settings: Settings,
    source: SourceImage,
}

impl Generator {
    /// Creates a generator, loading the source image.
    ///
    /// This is the fatal tier: a missing or undecodable source fails here,
    /// before anything touches the destination directory.
    ///
    /// # Errors
    ///
    /// - [`crate::error::Error::SourceNotFound`] if the source path does not exist
    /// - a decode error if the source is not a readable raster image
    pub fn new(settings: Settings) -> Result<Self> {
        let source = SourceImage::load(settings.source_path())?;

        log::info!(
            "Source image {} ({}x{})",
            source.path().display(),
            source.width(),
            source.height()
        );

        if !source.is_square() {
            log::warn!(
                "Source image is {}x{}, not square; every target will be forced square",
                source.width(),
                source.height()
            );
        }

        let largest = largest_target(&determine_kinds(&settings));
        if source.width() < largest || source.height() < largest {
            log::warn!(
                "Source image is smaller than the largest target ({}px); large icons will be upscaled",
                largest
            );
        }

        Ok(Self { settings, source })
    }

    /// Returns the generator settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the loaded source image.
    pub fn source(&self) -> &SourceImage {
        &self.source
    }

    /// Runs the generation passes and returns the per-artifact report.
    ///
    /// Passes run strictly in order: flat PNGs, then the ICNS container,
    /// then the ICO container (or the subset configured through
    /// [`Settings::artifact_kinds`], in the order given). A failed artifact
    /// is recorded in the report and never aborts the remaining ones.
    ///
    /// # Errors
    ///
    /// Only destination directory creation can fail here; at that point no
    /// artifact has been attempted yet.
    pub async fn generate(&self) -> Result<GenerationReport> {
        let dest_dir = self.settings.dest_dir();
        tokio::fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;

        let kinds = determine_kinds(&self.settings);
        log::debug!("Running passes: {:?}", kinds);

        let mut outcomes = Vec::new();
        for kind in kinds {
            match kind {
                ArtifactKind::FlatPng => {
                    outcomes.extend(flat::generate(&self.source, &self.settings).await);
                }
                ArtifactKind::Icns => {
                    outcomes.push(icns::generate(&self.source, &self.settings).await);
                }
                ArtifactKind::Ico => {
                    outcomes.push(ico::generate(&self.source, &self.settings).await);
                }
            }
        }

        let report = GenerationReport::new(outcomes);
        log::info!(
            "Generation finished: {} succeeded, {} failed",
            report.generated_count(),
            report.failure_count()
        );

        Ok(report)
    }
}

/// Determines the artifact kinds for a run.
fn determine_kinds(settings: &Settings) -> Vec<ArtifactKind> {
    match settings.artifact_kinds() {
        Some(kinds) => kinds.to_vec(),
        None => ArtifactKind::all(),
    }
}

/// Largest pixel size any of the given passes will request.
///
/// Used to decide whether the source image will be upscaled; a run filtered
/// to flat or ICO artifacts has a much smaller largest target than a full
/// run including the 1024px ICNS base.
fn largest_target(kinds: &[ArtifactKind]) -> u32 {
    kinds
        .iter()
        .map(|kind| match kind {
            ArtifactKind::FlatPng => {
                FLAT_TARGETS.iter().map(|target| target.size).max().unwrap_or(0)
            }
            ArtifactKind::Icns => ICNS_SIZES.iter().copied().max().unwrap_or(0),
            ArtifactKind::Ico => ICO_SIZES.iter().copied().max().unwrap_or(0),
        })
        .max()
        .unwrap_or(0)
}

/// Hex-encoded SHA-256 of in-memory artifact bytes.
///
/// Artifacts are encoded into memory before being written, so the checksum
/// covers exactly the bytes that land on disk.
pub(super) fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        use std::fmt::Write;
        let _ = write!(hex, "{:02x}", byte);
    }
    hex
}
