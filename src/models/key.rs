//! Key and key-row data structures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LAYER;

/// Semantic key category, used for styling and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Regular printable key
    #[default]
    Normal,
    /// Space bar
    Space,
    /// Enter / Return key
    Enter,
    /// Modifier key (Shift, Ctrl, Alt, Meta, CapsLock, Backspace, Tab)
    Modifier,
    /// Function-row key (reserved for layouts that define one)
    Function,
}

/// A single physical key with its per-layer outputs.
///
/// # Invariants
///
/// - `layers` always contains a `"default"` entry. Pure modifier keys carry
///   an empty string there and never produce output.
/// - `id` is the stable physical code used by the presentation layer
///   (e.g. "KeyA", "Digit1", "ShiftLeft").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key {
    /// Physical key code (e.g. "KeyA", "Digit1")
    pub id: String,
    /// Width multiplier (1.0 = standard key width)
    pub width: f32,
    /// Height multiplier (1.0 = standard key height)
    pub height: f32,
    /// Semantic category for special styling
    #[serde(default)]
    pub kind: KeyType,
    /// Explicit keycap label; falls back to the layer output when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Layer name -> output character(s)
    pub layers: HashMap<String, String>,
}

impl Key {
    /// Creates a new normal key with the given id and default-layer output.
    pub fn new(id: impl Into<String>, default_output: impl Into<String>) -> Self {
        let mut layers = HashMap::new();
        layers.insert(DEFAULT_LAYER.to_string(), default_output.into());
        Self {
            id: id.into(),
            width: 1.0,
            height: 1.0,
            kind: KeyType::Normal,
            label: None,
            layers,
        }
    }

    /// Sets the width multiplier.
    #[must_use]
    pub const fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Sets the height multiplier.
    #[must_use]
    pub const fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Sets the semantic key type.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyType) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the explicit keycap label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Adds an output for the named layer.
    #[must_use]
    pub fn with_layer(mut self, layer: impl Into<String>, output: impl Into<String>) -> Self {
        self.layers.insert(layer.into(), output.into());
        self
    }

    /// Returns the output for the given layer, falling back to the
    /// default layer. Empty outputs (pure modifiers) yield `None`.
    #[must_use]
    pub fn output_for(&self, layer: &str) -> Option<&str> {
        let output = self
            .layers
            .get(layer)
            .or_else(|| self.layers.get(DEFAULT_LAYER))?;
        if output.is_empty() {
            None
        } else {
            Some(output.as_str())
        }
    }

    /// Whether this key defines a non-empty output for the exact layer name.
    #[must_use]
    pub fn defines_layer(&self, layer: &str) -> bool {
        self.layers.get(layer).is_some_and(|o| !o.is_empty())
    }

    /// Returns the keycap label for the given layer.
    ///
    /// An explicit label wins; otherwise the layer output is shown, with
    /// whitespace characters substituted by visible glyphs.
    #[must_use]
    pub fn display_label(&self, layer: &str) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        match self.output_for(layer) {
            Some(" ") => "␣".to_string(),
            Some("\t") => "⇥".to_string(),
            Some("\n") => "↵".to_string(),
            Some(output) => output.to_string(),
            None => String::new(),
        }
    }
}

/// An ordered row of keys, left to right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRow {
    /// Keys in this row from left to right
    pub keys: Vec<Key>,
    /// Optional left offset in key-width units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
}

impl KeyRow {
    /// Creates a row from a list of keys with no offset.
    #[must_use]
    pub const fn new(keys: Vec<Key>) -> Self {
        Self { keys, offset: None }
    }
}
