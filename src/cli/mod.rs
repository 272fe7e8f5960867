//! CLI command handlers for Kbdlens.
//!
//! Each command is headless and scriptable, suitable for automation,
//! testing, and CI pipelines.

pub mod common;
pub mod config;
pub mod inspect;
pub mod layer;
pub mod platforms;
pub mod render;
pub mod simulate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult, LayoutSource};
pub use config::ConfigArgs;
pub use inspect::InspectArgs;
pub use layer::LayerArgs;
pub use platforms::PlatformsArgs;
pub use render::RenderArgs;
pub use simulate::SimulateArgs;
