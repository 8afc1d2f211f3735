//! ICO pass: the multi-resolution Windows icon container.
//!
//! Collects every candidate size into one `icon.ico`. ICO has no explicit
//! primary flag; entries are stored ascending and consumers pick by size,
//! with the 256x256 entry serving as the de-facto primary.

use crate::error::{Error, ErrorExt, Result};
use crate::generator::report::ArtifactOutcome;
use crate::generator::settings::Settings;
use crate::generator::source::SourceImage;
use crate::generator::targets::{ArtifactKind, ICO_FILE_NAME, ICO_SIZES};
use crate::generator::GeneratedArtifact;
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};

/// Generates `icon.ico` containing every candidate size that resampled
/// successfully.
///
/// A failed candidate is logged and omitted; only a run with zero surviving
/// candidates (or a failed serialize/write) produces a failed outcome.
pub(super) async fn generate(source: &SourceImage, settings: &Settings) -> ArtifactOutcome {
    let result = generate_container(source, settings).await;
    if let Err(e) = &result {
        log::warn!("ICO container failed: {}", e);
    }
    ArtifactOutcome {
        name: ICO_FILE_NAME.to_string(),
        kind: ArtifactKind::Ico,
        result,
    }
}

async fn generate_container(
    source: &SourceImage,
    settings: &Settings,
) -> Result<GeneratedArtifact> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);
    let mut sizes = Vec::with_capacity(ICO_SIZES.len());

    for size in ICO_SIZES {
        match encode_candidate(source, size) {
            Ok(entry) => {
                log::debug!("Added {}x{} to ICO directory", size, size);
                icon_dir.add_entry(entry);
                sizes.push(size);
            }
            Err(e) => {
                log::warn!("Skipping {}x{} ICO candidate: {}", size, size, e);
            }
        }
    }

    if sizes.is_empty() {
        return Err(Error::GenericError(
            "no ICO candidate size could be produced".to_string(),
        ));
    }

    let mut encoded = Vec::new();
    icon_dir
        .write(&mut encoded)
        .map_err(|e| Error::GenericError(format!("writing ICO data: {}", e)))?;

    let path = settings.artifact_path(ICO_FILE_NAME);
    tokio::fs::write(&path, &encoded)
        .await
        .fs_context("writing ICO file", &path)?;

    log::info!("Created ICO file: {}", path.display());

    Ok(GeneratedArtifact {
        kind: ArtifactKind::Ico,
        path,
        sizes,
        size: encoded.len() as u64,
        checksum: crate::generator::builder::sha256_hex(&encoded),
    })
}

fn encode_candidate(source: &SourceImage, size: u32) -> Result<IconDirEntry> {
    let rgba = source.resample(size, size);
    let icon_image = IconImage::from_rgba_data(size, size, rgba.into_raw());

    IconDirEntry::encode(&icon_image)
        .map_err(|e| Error::GenericError(format!("encoding {}x{} icon: {}", size, size, e)))
}
