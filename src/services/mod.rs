//! Resolution services over the layout model.
//!
//! These are pure functions: the layout is read-only and the transient
//! modifier/dead-key state is passed and returned by value.

pub mod keypress;
pub mod layers;

pub use keypress::{resolve_key_press, KeyPressOutcome};
pub use layers::{effective_layer, fallback_chain, layer_display_name, resolve_layer};
