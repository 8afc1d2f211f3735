//! Flat PNG pass: standalone single-size icon files.

use crate::error::{ErrorExt, Result};
use crate::generator::report::ArtifactOutcome;
use crate::generator::settings::Settings;
use crate::generator::source::SourceImage;
use crate::generator::targets::{ArtifactKind, FlatTarget, FLAT_TARGETS};
use crate::generator::GeneratedArtifact;
use image::ImageFormat;
use std::io::Cursor;

/// Generates the fixed-size standalone PNG files.
///
/// Each target is resampled and written independently; a failure is recorded
/// in its outcome and the remaining targets still run.
pub(super) async fn generate(source: &SourceImage, settings: &Settings) -> Vec<ArtifactOutcome> {
    let mut outcomes = Vec::with_capacity(FLAT_TARGETS.len());

    for target in FLAT_TARGETS {
        let result = generate_one(source, settings, target).await;
        if let Err(e) = &result {
            log::warn!("Flat target {} failed: {}", target.file_name, e);
        }
        outcomes.push(ArtifactOutcome {
            name: target.file_name.to_string(),
            kind: ArtifactKind::FlatPng,
            result,
        });
    }

    outcomes
}

async fn generate_one(
    source: &SourceImage,
    settings: &Settings,
    target: FlatTarget,
) -> Result<GeneratedArtifact> {
    let path = settings.artifact_path(target.file_name);
    let rgba = source.resample(target.size, target.size);

    let mut encoded = Vec::new();
    rgba.write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)?;

    tokio::fs::write(&path, &encoded)
        .await
        .fs_context("writing icon file", &path)?;

    log::debug!("Wrote {} ({}x{})", path.display(), target.size, target.size);

    Ok(GeneratedArtifact {
        kind: ArtifactKind::FlatPng,
        path,
        sizes: vec![target.size],
        size: encoded.len() as u64,
        checksum: crate::generator::builder::sha256_hex(&encoded),
    })
}
