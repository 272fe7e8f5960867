//! Data models for normalized keyboard layouts and session state.

pub mod key;
pub mod layout;
pub mod state;

pub use key::{Key, KeyRow, KeyType};
pub use layout::{KeyboardLayout, TransformTable};
pub use state::{DeadKeyState, ModifierState, PendingDeadKey};
