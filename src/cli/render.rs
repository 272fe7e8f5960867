//! Terminal rendering command.

use clap::Args;

use crate::cli::common::{parse_modifiers, CliResult, LayoutSource};
use crate::export::render_layer_diagram;
use crate::services::{effective_layer, resolve_layer};

/// Render a layer of a layout as a terminal diagram
#[derive(Debug, Clone, Args)]
pub struct RenderArgs {
    /// Layout source
    #[command(flatten)]
    pub source: LayoutSource,

    /// Layer to render (e.g. "shift", "alt+shift")
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    pub layer: String,

    /// Comma-separated modifiers to derive the layer from instead
    /// (e.g. "shift,alt"); overrides --layer
    #[arg(short, long, value_name = "MODS")]
    pub modifiers: Option<String>,
}

impl RenderArgs {
    /// Execute the render command
    pub fn execute(&self) -> CliResult<()> {
        let layout = self.source.load()?;

        let requested = match &self.modifiers {
            Some(spec) => resolve_layer(&parse_modifiers(spec)?).to_string(),
            None => self.layer.clone(),
        };
        let layer = effective_layer(&requested, &layout);

        println!("{}", layout.name);
        print!("{}", render_layer_diagram(&layout, layer));

        Ok(())
    }
}
