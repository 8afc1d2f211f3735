//! Source image loading and resampling.

use crate::error::{Context, Error, Result};
use image::{DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};

/// The decoded source raster, loaded once per run and read-only thereafter.
///
/// Every target is produced by resampling this image to exact dimensions;
/// nothing is cached between targets.
pub struct SourceImage {
    image: DynamicImage,
    path: PathBuf,
}

impl std::fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceImage")
            .field("path", &self.path)
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

impl SourceImage {
    /// Loads and decodes the source image.
    ///
    /// # Errors
    ///
    /// - [`Error::SourceNotFound`] if the file does not exist
    /// - a decode error if the file exists but is not a readable raster image
    ///
    /// Both are fatal; a run failing here has written nothing.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::SourceNotFound {
                path: path.to_path_buf(),
            });
        }

        let image = image::open(path)
            .map_err(Error::from)
            .with_context(|| format!("decoding source image {}", path.display()))?;

        log::debug!(
            "Loaded source image: {}x{} from {}",
            image.width(),
            image.height(),
            path.display()
        );

        Ok(Self {
            image,
            path: path.to_path_buf(),
        })
    }

    /// Resamples the source to exact dimensions with Lanczos3 filtering.
    ///
    /// Returns an RGBA8 buffer ready for PNG, ICNS, or ICO encoding. The
    /// aspect ratio is not preserved; a non-square source comes out distorted
    /// rather than letterboxed.
    pub fn resample(&self, target_width: u32, target_height: u32) -> RgbaImage {
        let resized = self.image.resize_exact(
            target_width,
            target_height,
            image::imageops::FilterType::Lanczos3, // Best quality for downscaling
        );

        resized.to_rgba8()
    }

    /// Returns the source width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Returns the source height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the source dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Returns whether the source is square (width == height).
    pub fn is_square(&self) -> bool {
        self.image.width() == self.image.height()
    }

    /// Returns the path the source was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
