//! Command execution functions coordinating icon generation.
//!
//! This module wires the parsed CLI arguments to the generator pipeline and
//! provides error handling and user feedback around it.

// Submodules
mod generate;
mod helpers;
mod preview;

use crate::cli::{Args, Command, RuntimeConfig};
use crate::error::Result;

// Import command executors
use generate::execute_generate;
use preview::execute_preview;

/// Execute the main command based on parsed arguments
pub async fn execute_command(args: Args) -> Result<i32> {
    // Validate arguments
    if let Err(validation_error) = args.validate() {
        // Create output for validation errors (never quiet)
        let output = super::OutputManager::new(false, false);
        output.error(&format!("Invalid arguments: {}", validation_error));
        return Ok(1);
    }

    let config = RuntimeConfig::from(&args);

    // Execute command and handle errors
    match &args.command {
        Command::Generate { .. } => {
            // Generate returns Result<i32> with exit code
            match execute_generate(&args, &config).await {
                Ok(exit_code) => {
                    // Don't print success message here - the command already did
                    Ok(exit_code)
                }
                Err(e) => {
                    config.error_println(&format!(
                        "Command '{}' failed: {}",
                        args.command.name(),
                        e
                    ));

                    // Show recovery suggestions if available
                    if config.is_verbose() {
                        let suggestions = e.recovery_suggestions();
                        if !suggestions.is_empty() {
                            config.println("\n💡 Recovery suggestions:");
                            for suggestion in suggestions {
                                config.println(&format!("  • {}", suggestion));
                            }
                        }
                    }

                    Ok(1)
                }
            }
        }
        Command::Preview { .. } => {
            // Preview returns Result<()>
            match execute_preview(&args, &config).await {
                Ok(()) => {
                    if !config.is_quiet() {
                        config.success_println(&format!(
                            "Command '{}' completed successfully",
                            args.command.name()
                        ));
                    }
                    Ok(0)
                }
                Err(e) => {
                    config.error_println(&format!(
                        "Command '{}' failed: {}",
                        args.command.name(),
                        e
                    ));

                    // Show recovery suggestions if available
                    if config.is_verbose() {
                        let suggestions = e.recovery_suggestions();
                        if !suggestions.is_empty() {
                            config.println("\n💡 Recovery suggestions:");
                            for suggestion in suggestions {
                                config.println(&format!("  • {}", suggestion));
                            }
                        }
                    }

                    Ok(1)
                }
            }
        }
    }
}
