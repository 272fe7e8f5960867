//! Normalized keyboard layout and dead-key transform table.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LAYER;
use crate::models::key::{Key, KeyRow};

/// Dead-key transform table: trigger character -> (base character -> composed output).
pub type TransformTable = HashMap<String, HashMap<String, String>>;

/// Complete normalized keyboard layout.
///
/// Produced once by the kbdgen transformer and treated as immutable
/// afterwards; the resolution engine only reads it.
///
/// # Invariants
///
/// - Every key defines a `"default"` layer entry (possibly empty).
/// - Every dead-key character referenced by any key's layer output has an
///   entry in `dead_keys` (the entry may match zero base characters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Synthesized identifier, `"{repo}-{layout}-{platform}"`
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Key rows, top to bottom
    pub rows: Vec<KeyRow>,
    /// Dead-key transform table
    #[serde(default)]
    pub dead_keys: TransformTable,
}

impl KeyboardLayout {
    /// Iterates over every key in the layout, row by row.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.rows.iter().flat_map(|row| row.keys.iter())
    }

    /// Finds a key by its physical code.
    #[must_use]
    pub fn key(&self, id: &str) -> Option<&Key> {
        self.keys().find(|key| key.id == id)
    }

    /// Whether at least one key defines a non-empty output for the layer.
    #[must_use]
    pub fn has_layer(&self, layer: &str) -> bool {
        self.keys().any(|key| key.defines_layer(layer))
    }

    /// Whether the given output arms a dead-key composition.
    #[must_use]
    pub fn is_dead_key(&self, output: &str) -> bool {
        self.dead_keys.contains_key(output)
    }

    /// Looks up the composed output for a pending dead key followed by a
    /// base character.
    #[must_use]
    pub fn compose(&self, trigger: &str, base: &str) -> Option<&str> {
        self.dead_keys
            .get(trigger)?
            .get(base)
            .map(String::as_str)
    }

    /// All layer names defined by at least one key, sorted.
    #[must_use]
    pub fn layer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .keys()
            .flat_map(|key| key.layers.keys().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Validates the layout structure.
    ///
    /// Checks:
    /// - At least one row exists
    /// - No row is empty
    /// - Every key carries a default-layer entry
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            anyhow::bail!("Layout '{}' has no rows", self.id);
        }

        for (idx, row) in self.rows.iter().enumerate() {
            if row.keys.is_empty() {
                anyhow::bail!("Row {} of layout '{}' has no keys", idx, self.id);
            }
            for key in &row.keys {
                if !key.layers.contains_key(DEFAULT_LAYER) {
                    anyhow::bail!(
                        "Key '{}' in layout '{}' is missing a default layer entry",
                        key.id,
                        self.id
                    );
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_layout() -> KeyboardLayout {
        let mut transforms = HashMap::new();
        transforms.insert("´".to_string(), {
            let mut inner = HashMap::new();
            inner.insert("a".to_string(), "á".to_string());
            inner
        });

        KeyboardLayout {
            id: "sme-se-macOS".to_string(),
            name: "Davvisámegiella".to_string(),
            rows: vec![KeyRow::new(vec![
                Key::new("KeyA", "a").with_layer("shift", "A"),
                Key::new("Quote", "´"),
            ])],
            dead_keys: transforms,
        }
    }

    #[test]
    fn test_key_lookup() {
        let layout = small_layout();
        assert!(layout.key("KeyA").is_some());
        assert!(layout.key("KeyZ").is_none());
    }

    #[test]
    fn test_has_layer() {
        let layout = small_layout();
        assert!(layout.has_layer("default"));
        assert!(layout.has_layer("shift"));
        assert!(!layout.has_layer("caps+shift"));
    }

    #[test]
    fn test_dead_key_table() {
        let layout = small_layout();
        assert!(layout.is_dead_key("´"));
        assert!(!layout.is_dead_key("a"));
        assert_eq!(layout.compose("´", "a"), Some("á"));
        assert_eq!(layout.compose("´", "b"), None);
    }

    #[test]
    fn test_layer_names_sorted_deduped() {
        let layout = small_layout();
        assert_eq!(layout.layer_names(), vec!["default", "shift"]);
    }

    #[test]
    fn test_validate_ok() {
        assert!(small_layout().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty() {
        let mut layout = small_layout();
        layout.rows.clear();
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_default() {
        let mut layout = small_layout();
        layout.rows[0].keys[0].layers.remove("default");
        assert!(layout.validate().is_err());
    }
}
