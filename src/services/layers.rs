//! Modifier-to-layer resolution and layer fallback logic.
//!
//! Layer names follow the canonical order used by kbdgen files. The
//! modifier priority is an ordered decision list: command combinations
//! dominate (macOS semantics), then alt, then ctrl, then caps, then shift
//! alone.

use crate::constants::DEFAULT_LAYER;
use crate::models::{KeyboardLayout, ModifierState};

/// Ordered (predicate, layer) decision list; the first match wins.
///
/// The order is significant and independently testable: cmd+alt+shift,
/// cmd+alt, cmd+shift, cmd, alt+shift, alt+caps, alt, ctrl+shift, ctrl,
/// caps+shift, caps, shift, default.
#[allow(clippy::type_complexity)]
static LAYER_PRIORITY: &[(fn(&ModifierState) -> bool, &str)] = &[
    (|m| m.cmd && m.alt && m.shift, "cmd+alt+shift"),
    (|m| m.cmd && m.alt, "cmd+alt"),
    (|m| m.cmd && m.shift, "cmd+shift"),
    (|m| m.cmd, "cmd"),
    (|m| m.alt && m.shift, "alt+shift"),
    (|m| m.alt && m.caps, "alt+caps"),
    (|m| m.alt, "alt"),
    (|m| m.ctrl && m.shift, "ctrl+shift"),
    (|m| m.ctrl, "ctrl"),
    (|m| m.caps && m.shift, "caps+shift"),
    (|m| m.caps, "caps"),
    (|m| m.shift, "shift"),
];

/// Computes the active layer name for a modifier state.
///
/// Pure and total over all 32 modifier combinations.
#[must_use]
pub fn resolve_layer(modifiers: &ModifierState) -> &'static str {
    for &(predicate, layer) in LAYER_PRIORITY {
        if predicate(modifiers) {
            return layer;
        }
    }
    DEFAULT_LAYER
}

/// Returns the fallback chain for a layer, most specific first.
///
/// The first element is the requested layer itself. This is the single
/// source of truth for layer fallback order: `caps+shift` degrades to
/// `shift`, the secondary mobile symbols layer degrades to the primary one,
/// and everything else degrades straight to `default`.
#[must_use]
pub fn fallback_chain(layer: &str) -> Vec<&str> {
    match layer {
        "caps+shift" => vec!["caps+shift", "shift", DEFAULT_LAYER],
        "symbols-2" => vec!["symbols-2", "symbols-1", DEFAULT_LAYER],
        DEFAULT_LAYER => vec![DEFAULT_LAYER],
        _ => vec![layer, DEFAULT_LAYER],
    }
}

/// Resolves the effective layer, accounting for layers entirely absent
/// from a layout.
///
/// Walks the fallback chain and returns the first layer any key in the
/// layout defines. Falls back to the requested layer unchanged if nothing
/// in the chain is defined (cannot happen when the default-layer invariant
/// holds).
#[must_use]
pub fn effective_layer<'a>(requested: &'a str, layout: &KeyboardLayout) -> &'a str {
    for layer in fallback_chain(requested) {
        if layout.has_layer(layer) {
            return layer;
        }
    }
    requested
}

/// Expands a composite layer identifier into a human-readable string,
/// e.g. `"cmd+alt+shift"` -> `"Cmd + Alt + Shift"`.
#[must_use]
pub fn layer_display_name(layer: &str) -> String {
    if layer == DEFAULT_LAYER {
        return "Default".to_string();
    }

    layer
        .split('+')
        .map(|part| match part {
            "cmd" => "Cmd",
            "alt" => "Alt",
            "ctrl" => "Ctrl",
            "shift" => "Shift",
            "caps" => "Caps",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" + ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Key, KeyRow};

    fn mods(shift: bool, caps: bool, alt: bool, cmd: bool, ctrl: bool) -> ModifierState {
        ModifierState {
            shift,
            caps,
            alt,
            cmd,
            ctrl,
        }
    }

    #[test]
    fn test_resolve_layer_priority_order() {
        assert_eq!(resolve_layer(&mods(true, false, true, true, false)), "cmd+alt+shift");
        assert_eq!(resolve_layer(&mods(false, false, true, true, false)), "cmd+alt");
        assert_eq!(resolve_layer(&mods(true, false, false, true, false)), "cmd+shift");
        assert_eq!(resolve_layer(&mods(false, false, false, true, false)), "cmd");
        assert_eq!(resolve_layer(&mods(true, false, true, false, false)), "alt+shift");
        assert_eq!(resolve_layer(&mods(false, true, true, false, false)), "alt+caps");
        assert_eq!(resolve_layer(&mods(false, false, true, false, false)), "alt");
        assert_eq!(resolve_layer(&mods(true, false, false, false, true)), "ctrl+shift");
        assert_eq!(resolve_layer(&mods(false, false, false, false, true)), "ctrl");
        assert_eq!(resolve_layer(&mods(true, true, false, false, false)), "caps+shift");
        assert_eq!(resolve_layer(&mods(false, true, false, false, false)), "caps");
        assert_eq!(resolve_layer(&mods(true, false, false, false, false)), "shift");
        assert_eq!(resolve_layer(&mods(false, false, false, false, false)), "default");
    }

    #[test]
    fn test_resolve_layer_cmd_dominates_everything() {
        // cmd wins over ctrl and caps regardless of their state
        assert_eq!(resolve_layer(&mods(false, true, false, true, true)), "cmd");
        assert_eq!(resolve_layer(&mods(true, true, true, true, true)), "cmd+alt+shift");
    }

    #[test]
    fn test_resolve_layer_total_and_stable() {
        // All 32 combinations resolve, and resolving twice is identical
        for bits in 0..32u8 {
            let state = mods(
                bits & 1 != 0,
                bits & 2 != 0,
                bits & 4 != 0,
                bits & 8 != 0,
                bits & 16 != 0,
            );
            let first = resolve_layer(&state);
            let second = resolve_layer(&state);
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    #[test]
    fn test_fallback_chain() {
        assert_eq!(fallback_chain("caps+shift"), vec!["caps+shift", "shift", "default"]);
        assert_eq!(fallback_chain("symbols-2"), vec!["symbols-2", "symbols-1", "default"]);
        assert_eq!(fallback_chain("alt"), vec!["alt", "default"]);
        assert_eq!(fallback_chain("default"), vec!["default"]);
    }

    fn layout_with_layers(layers: &[(&str, &str)]) -> KeyboardLayout {
        let mut key = Key::new("KeyA", "a");
        for (layer, output) in layers {
            key = key.with_layer(*layer, *output);
        }
        KeyboardLayout {
            id: "test".to_string(),
            name: "Test".to_string(),
            rows: vec![KeyRow::new(vec![key])],
            dead_keys: std::collections::HashMap::new(),
        }
    }

    #[test]
    fn test_effective_layer_degrades_caps_shift_to_shift() {
        let layout = layout_with_layers(&[("shift", "A")]);
        assert_eq!(effective_layer("caps+shift", &layout), "shift");
    }

    #[test]
    fn test_effective_layer_degrades_to_default() {
        let layout = layout_with_layers(&[]);
        assert_eq!(effective_layer("caps+shift", &layout), "default");
        assert_eq!(effective_layer("alt", &layout), "default");
    }

    #[test]
    fn test_effective_layer_keeps_defined_layer() {
        let layout = layout_with_layers(&[("caps+shift", "A")]);
        assert_eq!(effective_layer("caps+shift", &layout), "caps+shift");
    }

    #[test]
    fn test_layer_display_name() {
        assert_eq!(layer_display_name("default"), "Default");
        assert_eq!(layer_display_name("shift"), "Shift");
        assert_eq!(layer_display_name("cmd+alt+shift"), "Cmd + Alt + Shift");
        assert_eq!(layer_display_name("symbols-2"), "symbols-2");
    }
}
