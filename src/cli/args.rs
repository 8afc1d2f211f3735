//! Command line argument parsing and validation.
//!
//! This module provides minimal CLI argument parsing.
//! The tool is designed to "just work" - point it at a source image, it
//! renders the complete icon set.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Icon set generator for desktop application packaging
#[derive(Parser, Debug)]
#[command(
    name = "iconforge",
    version,
    about = "Generate the full application icon set (flat PNGs, ICNS, ICO) from one source image",
    long_about = "Render every icon artifact a desktop application needs for packaging.

Usage:
  iconforge generate app-icon.png
  iconforge generate app-icon.png --output src-tauri/icons
  iconforge generate app-icon.png --only icns --only ico
  iconforge preview app-icon.png"
)]
pub struct Args {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the complete icon set from a source image
    Generate {
        /// Path to the source image (a square, high-resolution PNG works best)
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Directory the icon files are written into
        #[arg(short, long, value_name = "DIR", default_value = "icons")]
        output: PathBuf,

        /// Restrict the run to specific artifact kinds (png, icns, ico); repeatable
        #[arg(long, value_name = "KIND")]
        only: Vec<String>,
    },

    /// Show the artifacts a run would produce without writing anything
    Preview {
        /// Path to the source image
        #[arg(value_name = "SOURCE")]
        source: PathBuf,

        /// Directory the icon files would be written into
        #[arg(short, long, value_name = "DIR", default_value = "icons")]
        output: PathBuf,
    },
}

impl Command {
    /// Command name for user-facing messages
    pub fn name(&self) -> &'static str {
        match self {
            Command::Generate { .. } => "generate",
            Command::Preview { .. } => "preview",
        }
    }
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        let source = match &self.command {
            Command::Generate { source, .. } => source,
            Command::Preview { source, .. } => source,
        };

        if source.as_os_str().is_empty() {
            return Err("Source image path is required".to_string());
        }

        if let Command::Generate { only, .. } = &self.command {
            for kind in only {
                if !matches!(kind.to_lowercase().as_str(), "png" | "flat" | "icns" | "ico") {
                    return Err(format!(
                        "Unknown artifact kind '{}'. Valid: png, icns, ico",
                        kind
                    ));
                }
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print info message
    pub fn info_println(&self, message: &str) {
        let _ = self.output.info(message);
    }

    /// Print verbose message (only shown with --verbose)
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print error message (always shown)
    pub fn error_println(&self, message: &str) {
        self.output.error(message);
    }

    /// Print warning message
    pub fn warning_println(&self, message: &str) {
        let _ = self.output.warn(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }

    /// Print a section header
    pub fn section(&self, title: &str) {
        let _ = self.output.section(title);
    }

    /// Print indented text
    pub fn indent(&self, message: &str) {
        let _ = self.output.indent(message);
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.output.is_verbose()
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.output.is_quiet()
    }
}
