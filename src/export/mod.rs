//! Terminal export of rendered layouts.

pub mod keyboard_renderer;

pub use keyboard_renderer::render_layer_diagram;
