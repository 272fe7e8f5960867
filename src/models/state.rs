//! Transient interactive-session state: modifiers and pending dead keys.
//!
//! These values are owned by the caller (the presentation layer) and passed
//! by value into the resolution engine; the engine never holds state of its
//! own.

use serde::{Deserialize, Serialize};

/// Active modifier flags.
///
/// The flags are independent booleans; all 32 combinations are valid
/// states, though only the recognized subset maps to distinct named layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ModifierState {
    /// Shift held (one-shot in the simulator)
    pub shift: bool,
    /// Caps lock toggled (persistent)
    pub caps: bool,
    /// Alt / Option held
    pub alt: bool,
    /// Cmd / Meta held
    pub cmd: bool,
    /// Ctrl held
    pub ctrl: bool,
}

impl ModifierState {
    /// State with no modifiers active.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            shift: false,
            caps: false,
            alt: false,
            cmd: false,
            ctrl: false,
        }
    }

    /// Whether no modifier is active.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.shift || self.caps || self.alt || self.cmd || self.ctrl)
    }

    /// Returns this state with every one-shot modifier cleared.
    ///
    /// Caps lock is a persistent toggle and survives.
    #[must_use]
    pub const fn cleared_oneshot(&self) -> Self {
        Self {
            shift: false,
            caps: self.caps,
            alt: false,
            cmd: false,
            ctrl: false,
        }
    }
}

/// A dead key armed by a previous press, awaiting its base character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDeadKey {
    /// The dead-key trigger character (e.g. "´")
    pub character: String,
    /// The layer that was active when the dead key was pressed
    pub layer: String,
}

/// Dead-key composition state.
///
/// Set when a key flagged as a dead key is pressed; consumed on the next
/// key press whether or not a transform match is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeadKeyState {
    pending: Option<PendingDeadKey>,
}

impl DeadKeyState {
    /// No composition pending.
    #[must_use]
    pub const fn idle() -> Self {
        Self { pending: None }
    }

    /// Composition pending with the given trigger character.
    #[must_use]
    pub fn composing(character: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            pending: Some(PendingDeadKey {
                character: character.into(),
                layer: layer.into(),
            }),
        }
    }

    /// Whether a dead key is armed.
    #[must_use]
    pub const fn is_composing(&self) -> bool {
        self.pending.is_some()
    }

    /// The armed dead key, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&PendingDeadKey> {
        self.pending.as_ref()
    }
}
