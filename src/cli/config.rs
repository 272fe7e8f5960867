//! Configuration management CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::constants::{APP_BINARY_NAME, APP_NAME};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Platform used when --platform is not given (macOS, windows, chromeOS)
    #[arg(long, value_name = "PLATFORM")]
    default_platform: Option<String>,

    /// Directory searched for layout files named on the command line
    #[arg(long, value_name = "DIR")]
    layouts_dir: Option<PathBuf>,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    default_platform: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    layouts_dir: Option<String>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::io(format!("Failed to load configuration: {e}")))?;

        if self.json {
            output_json(&config)?;
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        // At least one argument must be provided
        if self.default_platform.is_none() && self.layouts_dir.is_none() {
            return Err(CliError::usage(
                "At least one configuration option must be specified: --default-platform or --layouts-dir",
            ));
        }

        let mut config = Config::load().unwrap_or_default();

        if let Some(platform) = &self.default_platform {
            if !matches!(platform.as_str(), "macOS" | "windows" | "chromeOS") {
                return Err(CliError::usage(format!(
                    "Invalid platform '{platform}'. Must be 'macOS', 'windows', or 'chromeOS'"
                )));
            }
            config.default_platform.clone_from(platform);
        }

        if let Some(dir) = &self.layouts_dir {
            if !dir.is_dir() {
                return Err(CliError::usage(format!(
                    "Layouts directory does not exist: {}",
                    dir.display()
                )));
            }
            config.layouts_dir = Some(dir.clone());
        }

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e}")))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config) -> CliResult<()> {
    let output = ConfigOutput {
        default_platform: config.default_platform.clone(),
        layouts_dir: config
            .layouts_dir
            .as_ref()
            .map(|p| p.to_string_lossy().to_string()),
    };

    let json = serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::io(format!("Failed to serialize configuration to JSON: {e}")))?;

    println!("{json}");
    Ok(())
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("{APP_NAME} Configuration");
    println!("=====================");
    println!();

    println!("Default Platform: {}", config.default_platform);
    if let Some(dir) = &config.layouts_dir {
        println!("Layouts Directory: {}", dir.display());
    } else {
        println!("Layouts Directory: (not configured)");
        println!("  Set one with: {APP_BINARY_NAME} config set --layouts-dir <DIR>");
    }
    println!();
}
