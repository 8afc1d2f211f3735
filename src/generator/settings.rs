//! Generator configuration.
//!
//! Configuration is injected by the caller rather than read from hardcoded
//! paths; the CLI maps its arguments onto [`SettingsBuilder`], and library
//! consumers construct it directly.

use crate::generator::targets::ArtifactKind;
use std::path::{Path, PathBuf};

/// Central configuration for the generator, constructed via [`SettingsBuilder`].
///
/// # Examples
///
/// ```no_run
/// use iconforge::generator::SettingsBuilder;
///
/// # fn example() -> iconforge::error::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_path("app-icon.png")
///     .dest_dir("icons")
///     .build()?;
/// # Ok(())
/// # }
/// ```
///
/// # See Also
///
/// - [`SettingsBuilder`] - Builder for constructing Settings
#[derive(Clone, Debug)]
pub struct Settings {
    /// Path to the source image.
    source_path: PathBuf,

    /// Directory artifacts are written into.
    dest_dir: PathBuf,

    /// Artifact kinds to produce.
    ///
    /// None means all kinds in canonical order.
    artifact_kinds: Option<Vec<ArtifactKind>>,
}

impl Settings {
    /// Returns the source image path.
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Returns the destination directory.
    pub fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    /// Returns the artifact kinds to produce.
    ///
    /// None means all kinds in canonical order.
    pub fn artifact_kinds(&self) -> Option<&[ArtifactKind]> {
        self.artifact_kinds.as_deref()
    }

    /// Returns the full destination path for an artifact file name.
    pub fn artifact_path(&self, file_name: &str) -> PathBuf {
        self.dest_dir.join(file_name)
    }
}

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building generator settings with validation.
///
/// # Examples
///
/// ```no_run
/// use iconforge::generator::{ArtifactKind, SettingsBuilder};
///
/// # fn example() -> iconforge::error::Result<()> {
/// let settings = SettingsBuilder::new()
///     .source_path("app-icon.png")
///     .dest_dir("src-tauri/icons")
///     .artifact_kinds(vec![ArtifactKind::Icns, ArtifactKind::Ico])
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    source_path: Option<PathBuf>,
    dest_dir: Option<PathBuf>,
    artifact_kinds: Option<Vec<ArtifactKind>>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the source image path.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn source_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the destination directory.
    ///
    /// Created (with parents) at the start of a run if it does not exist.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn dest_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dest_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets specific artifact kinds to produce.
    ///
    /// If not set, all kinds are produced in canonical order.
    ///
    /// Default: None (all kinds)
    pub fn artifact_kinds(mut self, kinds: Vec<ArtifactKind>) -> Self {
        self.artifact_kinds = Some(kinds);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing:
    /// - `source_path`
    /// - `dest_dir`
    pub fn build(self) -> crate::error::Result<Settings> {
        use crate::error::Context;

        Ok(Settings {
            source_path: self.source_path.context("source_path is required")?,
            dest_dir: self.dest_dir.context("dest_dir is required")?,
            artifact_kinds: self.artifact_kinds,
        })
    }
}
