//! Key-press resolution engine.
//!
//! A two-state machine (idle / composing) that turns a key press under a
//! modifier state into emitted output, the next dead-key state, and a
//! decision on whether one-shot modifiers should be cleared. Every call is
//! a pure function of its inputs; the layout is never mutated.

use crate::models::{DeadKeyState, Key, KeyboardLayout, ModifierState};
use crate::services::layers::{effective_layer, resolve_layer};

/// Result of resolving a single key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPressOutcome {
    /// Emitted text, if any. Callers must filter `None` before appending
    /// to a text buffer.
    pub output: Option<String>,
    /// The dead-key state after this press.
    pub dead_key: DeadKeyState,
    /// Whether one-shot modifiers should be cleared. Caps lock is a
    /// persistent toggle and is never cleared by the engine.
    pub clear_modifiers: bool,
}

/// Resolves a key press against the layout, current modifiers, and pending
/// dead-key state.
///
/// Transitions:
/// - composing + printable press: transform hit emits the composed
///   character, a miss emits the pending character followed by the pressed
///   one; either way the pending dead key is consumed.
/// - idle + dead-key press: no output, the trigger character is armed and
///   modifiers are kept so the visual modifier state persists until the
///   composition resolves.
/// - idle + normal press: emits the key's output for the active layer.
///
/// A key with no printable output (a pure modifier) never triggers a
/// transition and never clears modifiers.
#[must_use]
pub fn resolve_key_press(
    layout: &KeyboardLayout,
    key: &Key,
    modifiers: &ModifierState,
    dead_key: &DeadKeyState,
) -> KeyPressOutcome {
    let layer = effective_layer(resolve_layer(modifiers), layout);
    let candidate = key.output_for(layer);

    let Some(candidate) = candidate else {
        // Pure modifier key: no transition, pending state carried through.
        return KeyPressOutcome {
            output: None,
            dead_key: dead_key.clone(),
            clear_modifiers: false,
        };
    };

    if let Some(pending) = dead_key.pending() {
        // The pending dead key is consumed whether or not a transform matches.
        let output = layout.compose(&pending.character, candidate).map_or_else(
            || format!("{}{}", pending.character, candidate),
            str::to_string,
        );
        return KeyPressOutcome {
            output: Some(output),
            dead_key: DeadKeyState::idle(),
            clear_modifiers: !modifiers.caps,
        };
    }

    if layout.is_dead_key(candidate) {
        return KeyPressOutcome {
            output: None,
            dead_key: DeadKeyState::composing(candidate, layer),
            clear_modifiers: false,
        };
    }

    KeyPressOutcome {
        output: Some(candidate.to_string()),
        dead_key: DeadKeyState::idle(),
        clear_modifiers: !modifiers.caps,
    }
}
