//! Layout inspection command.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{CliError, CliResult, LayoutSource};

/// Transform a kbdgen layout and summarize the result
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Layout source
    #[command(flatten)]
    pub source: LayoutSource,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectResult {
    id: String,
    name: String,
    rows: usize,
    keys: usize,
    layers: Vec<String>,
    dead_key_triggers: Vec<String>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> CliResult<()> {
        let layout = self.source.load()?;
        layout
            .validate()
            .map_err(|e| CliError::parse(format!("{e:#}")))?;

        let mut dead_key_triggers: Vec<String> = layout.dead_keys.keys().cloned().collect();
        dead_key_triggers.sort();

        let result = InspectResult {
            id: layout.id.clone(),
            name: layout.name.clone(),
            rows: layout.rows.len(),
            keys: layout.keys().count(),
            layers: layout.layer_names(),
            dead_key_triggers,
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&result)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Layout:    {}", result.name);
            println!("Id:        {}", result.id);
            println!("Rows:      {}", result.rows);
            println!("Keys:      {}", result.keys);
            println!("Layers:    {}", result.layers.join(", "));
            if result.dead_key_triggers.is_empty() {
                println!("Dead keys: none");
            } else {
                println!("Dead keys: {}", result.dead_key_triggers.join(" "));
            }
        }

        Ok(())
    }
}
