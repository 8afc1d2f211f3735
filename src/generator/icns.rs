//! ICNS pass: the multi-resolution macOS icon container.

use crate::error::{Error, ErrorExt, Result};
use crate::generator::report::ArtifactOutcome;
use crate::generator::settings::Settings;
use crate::generator::source::SourceImage;
use crate::generator::targets::{icns_icon_type, ArtifactKind, ICNS_FILE_NAME, ICNS_SIZES};
use crate::generator::GeneratedArtifact;
use icns::{IconFamily, Image as IcnsImage, PixelFormat};
use std::io::Cursor;
use tokio::task;

/// Generates `icon.icns` containing every candidate size that resampled
/// successfully.
///
/// The largest size is added first so it leads the family as the base image;
/// a failed candidate is logged and omitted. Only a run with zero surviving
/// candidates (or a failed serialize/write) produces a failed outcome.
pub(super) async fn generate(source: &SourceImage, settings: &Settings) -> ArtifactOutcome {
    let result = generate_container(source, settings).await;
    if let Err(e) = &result {
        log::warn!("ICNS container failed: {}", e);
    }
    ArtifactOutcome {
        name: ICNS_FILE_NAME.to_string(),
        kind: ArtifactKind::Icns,
        result,
    }
}

async fn generate_container(
    source: &SourceImage,
    settings: &Settings,
) -> Result<GeneratedArtifact> {
    let mut family = IconFamily::new();
    let mut sizes = Vec::with_capacity(ICNS_SIZES.len());

    // Largest first: the base image leads the family, smaller sizes follow
    // as alternates.
    let mut candidates = ICNS_SIZES;
    candidates.sort_unstable_by(|a, b| b.cmp(a));

    for size in candidates {
        match add_candidate(source, &mut family, size) {
            Ok(()) => {
                log::debug!("Added {}x{} to ICNS family", size, size);
                sizes.push(size);
            }
            Err(e) => {
                log::warn!("Skipping {}x{} ICNS candidate: {}", size, size, e);
            }
        }
    }

    if sizes.is_empty() {
        return Err(Error::GenericError(
            "no ICNS candidate size could be produced".to_string(),
        ));
    }

    // Wrap CPU-bound ICNS encoding in spawn_blocking
    let encoded = task::spawn_blocking(move || -> Result<Vec<u8>> {
        let mut encoded = Vec::new();
        family
            .write(Cursor::new(&mut encoded))
            .map_err(|e| Error::GenericError(format!("writing ICNS data: {}", e)))?;
        Ok(encoded)
    })
    .await
    .map_err(|e| Error::GenericError(format!("ICNS encoding task failed: {}", e)))??;

    let path = settings.artifact_path(ICNS_FILE_NAME);
    tokio::fs::write(&path, &encoded)
        .await
        .fs_context("writing ICNS file", &path)?;

    log::info!("Created ICNS file: {}", path.display());

    sizes.sort_unstable();
    Ok(GeneratedArtifact {
        kind: ArtifactKind::Icns,
        path,
        sizes,
        size: encoded.len() as u64,
        checksum: crate::generator::builder::sha256_hex(&encoded),
    })
}

fn add_candidate(source: &SourceImage, family: &mut IconFamily, size: u32) -> Result<()> {
    let icon_type = icns_icon_type(size).ok_or_else(|| {
        Error::GenericError(format!("no ICNS element type for {}x{}", size, size))
    })?;

    let rgba = source.resample(size, size);

    let icns_img = IcnsImage::from_data(PixelFormat::RGBA, size, size, rgba.into_raw())
        .map_err(|e| {
            Error::GenericError(format!("creating ICNS image for {}x{}: {}", size, size, e))
        })?;

    family
        .add_icon_with_type(&icns_img, icon_type)
        .map_err(|e| {
            Error::GenericError(format!(
                "adding {}x{} to icon family: {}",
                size, size, e
            ))
        })
}
