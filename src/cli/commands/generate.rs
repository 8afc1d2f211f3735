//! Generate command implementation.
//!
//! Runs the flat PNG, ICNS, and ICO passes over the source image and reports
//! one outcome line per attempted artifact.

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;
use crate::generator::{Generator, SettingsBuilder};

use super::helpers::{parse_artifact_kind, print_generation_summary};

/// Execute generate command
pub(super) async fn execute_generate(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let Command::Generate {
        source,
        output,
        only,
    } = &args.command
    else {
        unreachable!("execute_generate called with non-Generate command");
    };

    config.verbose_println("Starting icon generation...");

    // 1. Build generator settings from arguments
    let mut builder = SettingsBuilder::new().source_path(source).dest_dir(output);

    if !only.is_empty() {
        let kinds = only
            .iter()
            .map(|value| parse_artifact_kind(value))
            .collect::<Result<Vec<_>>>()?;
        builder = builder.artifact_kinds(kinds);
    }

    let settings = builder.build()?;

    // 2. Load the source image (fatal when missing or undecodable)
    let generator = Generator::new(settings)?;
    let (width, height) = generator.source().dimensions();
    config.info_println(&format!(
        "Source image: {}x{} ({})",
        width,
        height,
        source.display()
    ));

    // 3. Run the generation passes
    let report = generator.generate().await?;

    // 4. One line per attempted artifact
    for outcome in report.outcomes() {
        match &outcome.result {
            Ok(artifact) => {
                config.success_println(&format!(
                    "Generated {} ({})",
                    outcome.name,
                    artifact.describe_sizes()
                ));
            }
            Err(e) => {
                config.warning_println(&format!("Failed to generate {}: {}", outcome.name, e));
            }
        }
    }

    // 5. Summary with sizes and checksums
    print_generation_summary(&report, output, config);

    Ok(0)
}
