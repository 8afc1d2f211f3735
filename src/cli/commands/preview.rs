//! Preview command implementation.
//!
//! Shows the artifacts a generation run would produce without writing
//! anything to disk.

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;
use crate::generator::{FLAT_TARGETS, ICNS_FILE_NAME, ICNS_SIZES, ICO_FILE_NAME, ICO_SIZES};

/// Execute preview command
pub(super) async fn execute_preview(args: &Args, config: &RuntimeConfig) -> Result<()> {
    if let Command::Preview { source, output } = &args.command {
        config.verbose_println("Previewing icon generation...");

        // The source is informational here; a missing or unreadable file is a
        // warning, not an error, since nothing is written.
        match image::image_dimensions(source) {
            Ok((width, height)) => {
                config.println(&format!(
                    "🔍 Source image: {} ({}x{})",
                    source.display(),
                    width,
                    height
                ));
                if width != height {
                    config.warning_println(&format!(
                        "Source is not square ({}x{}); every target will be forced square",
                        width, height
                    ));
                }
            }
            Err(e) => {
                config.warning_println(&format!(
                    "Source image {} is not readable: {}",
                    source.display(),
                    e
                ));
            }
        }

        config.section("Planned Icon Set");
        config.println(&format!("Destination: {}", output.display()));

        config.println(&format!("\nFlat PNGs ({}):", FLAT_TARGETS.len()));
        for target in FLAT_TARGETS {
            config.println(&format!(
                "  • {} ({}x{})",
                target.file_name, target.size, target.size
            ));
        }

        config.println("\nContainers (2):");
        config.println(&format!(
            "  • {} (sizes {})",
            ICNS_FILE_NAME,
            join_sizes(&ICNS_SIZES)
        ));
        config.println(&format!(
            "  • {} (sizes {})",
            ICO_FILE_NAME,
            join_sizes(&ICO_SIZES)
        ));
    } else {
        unreachable!("execute_preview called with non-Preview command");
    }

    Ok(())
}

fn join_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|size| size.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
