//! Kbdlens - Keyboard layout viewer for kbdgen bundles
//!
//! This binary inspects kbdgen layout files, renders layer diagrams,
//! resolves modifier combinations to layers, and simulates key presses.

use clap::{Parser, Subcommand};

use kbdlens::cli::{
    CliErrorKind, ConfigArgs, InspectArgs, LayerArgs, PlatformsArgs, RenderArgs, SimulateArgs,
};

/// Kbdlens - Keyboard layout viewer for kbdgen bundles
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the platforms defined in a layout file
    Platforms(PlatformsArgs),
    /// Summarize a transformed layout
    Inspect(InspectArgs),
    /// Render a layer as a text diagram
    Render(RenderArgs),
    /// Resolve a modifier combination to a layer
    Layer(LayerArgs),
    /// Simulate a sequence of key presses
    Simulate(SimulateArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Platforms(args) => args.execute(),
        Command::Inspect(args) => args.execute(),
        Command::Render(args) => args.execute(),
        Command::Layer(args) => args.execute(),
        Command::Simulate(args) => args.execute(),
        Command::Config(args) => args.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        let code = match e.kind {
            CliErrorKind::Usage => 2,
            CliErrorKind::Io | CliErrorKind::Parse => 1,
        };
        std::process::exit(code);
    }
}
