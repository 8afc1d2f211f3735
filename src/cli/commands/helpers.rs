//! Shared helpers for command implementations.

use crate::bail;
use crate::cli::RuntimeConfig;
use crate::error::Result;
use crate::generator::{ArtifactKind, GenerationReport};
use std::path::Path;

/// Parse an artifact kind string to the enum
pub(super) fn parse_artifact_kind(value: &str) -> Result<ArtifactKind> {
    match value.to_lowercase().as_str() {
        "png" | "flat" => Ok(ArtifactKind::FlatPng),
        "icns" => Ok(ArtifactKind::Icns),
        "ico" => Ok(ArtifactKind::Ico),
        _ => bail!("Unknown artifact kind: '{}'. Valid: png, icns, ico", value),
    }
}

/// Format a byte count for display
pub(super) fn format_size(bytes: u64) -> String {
    if bytes >= 1_048_576 {
        format!("{:.2} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Print generation summary
pub(super) fn print_generation_summary(
    report: &GenerationReport,
    dest_dir: &Path,
    config: &RuntimeConfig,
) {
    if report.generated_count() == 0 {
        config.warning_println("No artifacts were generated");
        return;
    }

    config.success_println(&format!(
        "Generated {} of {} artifact(s) in {}",
        report.generated_count(),
        report.outcomes().len(),
        dest_dir.display()
    ));

    if config.is_verbose() {
        for artifact in report.generated() {
            config.println(&format!("\n  {}:", artifact.kind));
            config.println(&format!(
                "    📦 {} ({})",
                artifact.path.display(),
                format_size(artifact.size)
            ));
            config.println(&format!("    🔐 SHA256: {}", artifact.checksum));
        }
    }

    if report.failure_count() > 0 {
        config.warning_println(&format!("{} artifact(s) failed", report.failure_count()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_artifact_kind_accepts_aliases() {
        assert_eq!(
            parse_artifact_kind("png").expect("png should parse"),
            ArtifactKind::FlatPng
        );
        assert_eq!(
            parse_artifact_kind("FLAT").expect("flat should parse"),
            ArtifactKind::FlatPng
        );
        assert_eq!(
            parse_artifact_kind("icns").expect("icns should parse"),
            ArtifactKind::Icns
        );
        assert_eq!(
            parse_artifact_kind("Ico").expect("ico should parse"),
            ArtifactKind::Ico
        );
    }

    #[test]
    fn test_parse_artifact_kind_rejects_unknown() {
        let err = parse_artifact_kind("svg").expect_err("svg should be rejected");
        assert!(
            err.to_string().contains("svg"),
            "error should name the bad kind"
        );
    }

    #[test]
    fn test_format_size_units() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3_145_728), "3.00 MB");
    }
}
