//! Per-artifact outcome collection for a generation run.
//!
//! The run records one outcome per attempted artifact instead of printing as
//! it goes; callers decide how to render successes and failures afterwards.

use crate::error::{Error, Result};
use crate::generator::targets::ArtifactKind;
use crate::generator::GeneratedArtifact;

/// Outcome of one attempted artifact.
#[derive(Debug)]
pub struct ArtifactOutcome {
    /// Output file name (e.g. `32x32.png`, `icon.icns`).
    pub name: String,

    /// The artifact category this outcome belongs to.
    pub kind: ArtifactKind,

    /// The generated artifact, or the error that prevented it.
    pub result: Result<GeneratedArtifact>,
}

impl ArtifactOutcome {
    /// Returns whether this artifact was generated successfully.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the generated artifact, if any.
    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        self.result.as_ref().ok()
    }

    /// Returns the error that prevented generation, if any.
    pub fn error(&self) -> Option<&Error> {
        self.result.as_ref().err()
    }
}

/// Complete record of a generation run, in attempt order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    outcomes: Vec<ArtifactOutcome>,
}

impl GenerationReport {
    /// Creates a report from collected outcomes.
    pub(crate) fn new(outcomes: Vec<ArtifactOutcome>) -> Self {
        Self { outcomes }
    }

    /// Returns all outcomes in the order they were attempted.
    pub fn outcomes(&self) -> &[ArtifactOutcome] {
        &self.outcomes
    }

    /// Iterates over the successfully generated artifacts.
    pub fn generated(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        self.outcomes.iter().filter_map(|outcome| outcome.artifact())
    }

    /// Iterates over the outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ArtifactOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_success())
    }

    /// Number of successfully generated artifacts.
    pub fn generated_count(&self) -> usize {
        self.generated().count()
    }

    /// Number of failed artifacts.
    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Returns whether every attempted artifact succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.failure_count() == 0
    }

    /// Total encoded size of the generated artifacts in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.generated().map(|artifact| artifact.size).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn success(name: &str, size: u64) -> ArtifactOutcome {
        ArtifactOutcome {
            name: name.to_string(),
            kind: ArtifactKind::FlatPng,
            result: Ok(GeneratedArtifact {
                kind: ArtifactKind::FlatPng,
                path: PathBuf::from(name),
                sizes: vec![32],
                size,
                checksum: "0".repeat(64),
            }),
        }
    }

    fn failure(name: &str) -> ArtifactOutcome {
        ArtifactOutcome {
            name: name.to_string(),
            kind: ArtifactKind::FlatPng,
            result: Err(Error::GenericError("encode failed".to_string())),
        }
    }

    #[test]
    fn test_report_counts() {
        let report =
            GenerationReport::new(vec![success("a.png", 10), failure("b.png"), success("c.png", 5)]);

        assert_eq!(report.generated_count(), 2);
        assert_eq!(report.failure_count(), 1);
        assert!(!report.all_succeeded());
        assert_eq!(report.total_bytes(), 15);
    }

    #[test]
    fn test_report_preserves_attempt_order() {
        let report = GenerationReport::new(vec![failure("first"), success("second", 1)]);
        let names: Vec<_> = report.outcomes().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }

    #[test]
    fn test_outcome_accessors() {
        let ok = success("x.png", 1);
        assert!(ok.is_success());
        assert!(ok.artifact().is_some());
        assert!(ok.error().is_none());

        let bad = failure("y.png");
        assert!(!bad.is_success());
        assert!(bad.artifact().is_none());
        assert!(bad.error().is_some());
    }
}
