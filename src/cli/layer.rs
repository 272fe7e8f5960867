//! Modifier-to-layer resolution command.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::common::{parse_modifiers, CliError, CliResult, LayoutSource};
use crate::services::{effective_layer, fallback_chain, layer_display_name, resolve_layer};

/// Resolve a modifier combination to its layer name
#[derive(Debug, Clone, Args)]
pub struct LayerArgs {
    /// Comma-separated modifiers (e.g. "shift,caps"); empty for default
    #[arg(short, long, value_name = "MODS", default_value = "")]
    pub modifiers: String,

    /// Optional kbdgen layout YAML file used to compute the effective layer
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Platform section to extract when a file is given
    #[arg(short, long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LayerResult {
    layer: String,
    display_name: String,
    fallback_chain: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    effective_layer: Option<String>,
}

impl LayerArgs {
    /// Execute the layer command
    pub fn execute(&self) -> CliResult<()> {
        let modifiers = parse_modifiers(&self.modifiers)?;
        let layer = resolve_layer(&modifiers);

        let effective = match &self.file {
            Some(file) => {
                let source = LayoutSource {
                    file: file.clone(),
                    platform: self.platform.clone(),
                    repo: "local".to_string(),
                    layout_name: None,
                };
                let layout = source.load()?;
                Some(effective_layer(layer, &layout).to_string())
            }
            None => None,
        };

        let result = LayerResult {
            layer: layer.to_string(),
            display_name: layer_display_name(layer),
            fallback_chain: fallback_chain(layer)
                .into_iter()
                .map(str::to_string)
                .collect(),
            effective_layer: effective,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Layer:     {}", result.layer);
            println!("Display:   {}", result.display_name);
            println!("Fallbacks: {}", result.fallback_chain.join(" -> "));
            if let Some(effective) = &result.effective_layer {
                println!("Effective: {effective}");
            }
        }

        Ok(())
    }
}
