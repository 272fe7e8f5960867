//! Key-press simulation command.
//!
//! Drives the resolution engine over a press script and prints the text
//! that would be typed, mirroring the interactive viewer headlessly.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{apply_modifier, CliError, CliResult, LayoutSource};
use crate::models::{DeadKeyState, KeyboardLayout, ModifierState};
use crate::services::{resolve_key_press, resolve_layer};

/// Simulate a sequence of key presses against a layout
#[derive(Debug, Clone, Args)]
pub struct SimulateArgs {
    /// Layout source
    #[command(flatten)]
    pub source: LayoutSource,

    /// Press script: whitespace-separated tokens of the form
    /// "mod+mod+KeyId" (e.g. "shift+KeyA Quote KeyE Backspace")
    #[arg(short, long, value_name = "SCRIPT")]
    pub script: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One resolved press in a simulation transcript.
#[derive(Debug, Clone, Serialize)]
pub struct PressRecord {
    /// The physical key pressed
    pub key: String,
    /// The layer that was active
    pub layer: String,
    /// What the press emitted, if anything
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

/// Result of running a press script.
#[derive(Debug, Clone, Serialize)]
pub struct Simulation {
    /// The accumulated text buffer
    pub text: String,
    /// Per-press transcript
    pub presses: Vec<PressRecord>,
    /// Dead-key character still pending at the end of the script
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_dead_key: Option<String>,
}

/// Runs a press script against a layout.
///
/// Tokens are whitespace-separated; each token names zero or more
/// modifiers followed by a physical key id, joined by `+`. One-shot
/// modifiers persist until the engine clears them, so `shift+Quote KeyA`
/// keeps shift active through the dead-key composition. `Backspace`
/// removes the last character from the buffer.
pub fn run_script(layout: &KeyboardLayout, script: &str) -> CliResult<Simulation> {
    let mut text = String::new();
    let mut presses = Vec::new();
    let mut modifiers = ModifierState::new();
    let mut dead_key = DeadKeyState::idle();

    for token in script.split_whitespace() {
        let mut parts: Vec<&str> = token.split('+').collect();
        let key_id = parts.pop().filter(|id| !id.is_empty()).ok_or_else(|| {
            CliError::usage(format!("Empty key in script token '{token}'"))
        })?;
        for name in parts {
            apply_modifier(&mut modifiers, name)?;
        }

        if key_id == "Backspace" {
            text.pop();
            presses.push(PressRecord {
                key: key_id.to_string(),
                layer: resolve_layer(&modifiers).to_string(),
                output: None,
            });
            continue;
        }

        let key = layout.key(key_id).ok_or_else(|| {
            CliError::usage(format!("Key '{key_id}' not found in layout '{}'", layout.id))
        })?;

        let outcome = resolve_key_press(layout, key, &modifiers, &dead_key);

        if let Some(output) = &outcome.output {
            text.push_str(output);
        }
        presses.push(PressRecord {
            key: key_id.to_string(),
            layer: resolve_layer(&modifiers).to_string(),
            output: outcome.output,
        });

        dead_key = outcome.dead_key;
        if outcome.clear_modifiers {
            modifiers = modifiers.cleared_oneshot();
        }
    }

    Ok(Simulation {
        text,
        presses,
        pending_dead_key: dead_key.pending().map(|p| p.character.clone()),
    })
}

impl SimulateArgs {
    /// Execute the simulate command
    pub fn execute(&self) -> CliResult<()> {
        let layout = self.source.load()?;
        let simulation = run_script(&layout, &self.script)?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&simulation)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            println!("Typed: {}", simulation.text);
            if let Some(pending) = &simulation.pending_dead_key {
                println!("Pending dead key: {pending}");
            }
        }

        Ok(())
    }
}
