//! Platform listing command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult};
use crate::parser;

/// List the platforms available in a kbdgen layout file
#[derive(Debug, Clone, Args)]
pub struct PlatformsArgs {
    /// Path to kbdgen layout YAML file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PlatformsResult {
    file: String,
    platforms: Vec<&'static str>,
}

impl PlatformsArgs {
    /// Execute the platforms command
    pub fn execute(&self) -> CliResult<()> {
        let raw = parser::parse_kbdgen_file(&self.file)
            .map_err(|e| CliError::parse(format!("{e:#}")))?;

        let result = PlatformsResult {
            file: self.file.display().to_string(),
            platforms: raw.available_platforms(),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else if result.platforms.is_empty() {
            println!("No supported platforms found in {}", result.file);
        } else {
            println!("Platforms in {}:", result.file);
            for platform in &result.platforms {
                println!("  {platform}");
            }
        }

        Ok(())
    }
}
