//! Fixed target tables for the generated icon set.
//!
//! The file names and sizes here are the ones desktop packaging tooling
//! expects verbatim, so they are compiled in rather than configured.

use icns::IconType;
use std::fmt;

/// Artifact categories produced by a generation run.
///
/// # Examples
///
/// ```
/// use iconforge::generator::ArtifactKind;
///
/// for kind in ArtifactKind::all() {
///     println!("pass: {}", kind);
/// }
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ArtifactKind {
    /// Standalone single-size PNG files.
    FlatPng,

    /// The multi-resolution macOS `icon.icns` container.
    Icns,

    /// The multi-resolution Windows `icon.ico` container.
    Ico,
}

impl ArtifactKind {
    /// Returns the short name for this artifact kind.
    ///
    /// This is the lowercase identifier used in CLI output and flags.
    pub fn short_name(&self) -> &'static str {
        match self {
            ArtifactKind::FlatPng => "png",
            ArtifactKind::Icns => "icns",
            ArtifactKind::Ico => "ico",
        }
    }

    /// Returns all artifact kinds in canonical generation order.
    ///
    /// The flat PNG pass runs first, then the ICNS container, then the ICO
    /// container.
    pub fn all() -> Vec<ArtifactKind> {
        vec![ArtifactKind::FlatPng, ArtifactKind::Icns, ArtifactKind::Ico]
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// A single flat PNG output target.
#[derive(Clone, Copy, Debug)]
pub struct FlatTarget {
    /// Output file name within the destination directory.
    pub file_name: &'static str,

    /// Square edge length in pixels.
    pub size: u32,
}

/// The fixed flat PNG outputs, in generation order.
///
/// Covers the Linux/generic sizes plus the Windows Store logo family.
pub const FLAT_TARGETS: [FlatTarget; 13] = [
    FlatTarget { file_name: "32x32.png", size: 32 },
    FlatTarget { file_name: "128x128.png", size: 128 },
    FlatTarget { file_name: "128x128@2x.png", size: 256 },
    FlatTarget { file_name: "Square30x30Logo.png", size: 30 },
    FlatTarget { file_name: "Square44x44Logo.png", size: 44 },
    FlatTarget { file_name: "Square71x71Logo.png", size: 71 },
    FlatTarget { file_name: "Square89x89Logo.png", size: 89 },
    FlatTarget { file_name: "Square107x107Logo.png", size: 107 },
    FlatTarget { file_name: "Square142x142Logo.png", size: 142 },
    FlatTarget { file_name: "Square150x150Logo.png", size: 150 },
    FlatTarget { file_name: "Square284x284Logo.png", size: 284 },
    FlatTarget { file_name: "Square310x310Logo.png", size: 310 },
    // Microsoft Store listing logo; 50 is the 100% scale asset.
    FlatTarget { file_name: "StoreLogo.png", size: 50 },
];

/// Candidate square sizes collected into `icon.icns`.
pub const ICNS_SIZES: [u32; 7] = [16, 32, 64, 128, 256, 512, 1024];

/// Candidate square sizes collected into `icon.ico`.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// File name of the ICNS container artifact.
pub const ICNS_FILE_NAME: &str = "icon.icns";

/// File name of the ICO container artifact.
pub const ICO_FILE_NAME: &str = "icon.ico";

/// Maps a candidate size to the ICNS element type it is stored under.
///
/// The 1024px candidate lands in the `512x512@2x` slot; ICNS has no
/// single-scale 1024 element.
pub(crate) fn icns_icon_type(size: u32) -> Option<IconType> {
    match size {
        16 => Some(IconType::RGBA32_16x16),
        32 => Some(IconType::RGBA32_32x32),
        64 => Some(IconType::RGBA32_64x64),
        128 => Some(IconType::RGBA32_128x128),
        256 => Some(IconType::RGBA32_256x256),
        512 => Some(IconType::RGBA32_512x512),
        1024 => Some(IconType::RGBA32_512x512_2x),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_target_names_are_unique() {
        let mut names: Vec<_> = FLAT_TARGETS.iter().map(|t| t.file_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), FLAT_TARGETS.len(), "duplicate flat target name");
    }

    #[test]
    fn test_every_icns_candidate_has_an_element_type() {
        for size in ICNS_SIZES {
            assert!(
                icns_icon_type(size).is_some(),
                "no ICNS element type for {}px",
                size
            );
        }
        assert!(icns_icon_type(24).is_none());
    }

    #[test]
    fn test_kind_short_names() {
        assert_eq!(ArtifactKind::FlatPng.short_name(), "png");
        assert_eq!(ArtifactKind::Icns.to_string(), "icns");
        assert_eq!(ArtifactKind::Ico.to_string(), "ico");
        assert_eq!(ArtifactKind::all().len(), 3);
    }
}
