//! kbdgen YAML parser and layout transformer.
//!
//! This module handles parsing kbdgen layout files (the format used by
//! giellalt for minority-language keyboards) and transforming them into the
//! normalized internal [`KeyboardLayout`] representation.
//!
//! The kbdgen format represents keyboard layers as multi-line strings where
//! each line is one physical row and characters are separated by whitespace.
//! Tokens at the same (row, column) across different named layers describe
//! the same physical key's output under that layer. Transforms define
//! dead-key combinations (e.g. `´` + `a` = `á`).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::DEFAULT_LAYER;
use crate::models::{Key, KeyRow, KeyType, KeyboardLayout, TransformTable};

/// Errors raised while transforming kbdgen data into a layout.
///
/// Both variants abort layout construction entirely; no partial layout is
/// ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The requested platform section is absent from the raw payload.
    #[error("platform \"{platform}\" not found in layout")]
    PlatformNotFound {
        /// The platform that was requested
        platform: String,
    },
    /// The platform section exists but lacks a default layer, so the
    /// layout has no valid fallback target.
    #[error("no default layer found for platform \"{platform}\"")]
    MissingDefaultLayer {
        /// The platform that was requested
        platform: String,
    },
}

/// Raw kbdgen layout file (simplified to the fields the viewer consumes).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KbdgenLayout {
    /// Display names keyed by language code
    #[serde(default, rename = "displayNames")]
    pub display_names: HashMap<String, String>,
    /// Locale code (e.g. "se-SE")
    pub locale: Option<String>,
    /// Transforms shared across platforms
    #[serde(default)]
    pub transforms: TransformTable,
    /// macOS platform section
    #[serde(rename = "macOS")]
    pub mac_os: Option<KbdgenPlatform>,
    /// Windows platform section
    pub windows: Option<KbdgenPlatform>,
    /// ChromeOS platform section
    #[serde(rename = "chromeOS")]
    pub chrome_os: Option<KbdgenPlatform>,
    /// iOS platform section
    #[serde(rename = "iOS")]
    pub i_os: Option<KbdgenPlatform>,
    /// Android platform section
    pub android: Option<KbdgenPlatform>,
}

impl KbdgenLayout {
    /// Looks up a platform section by its kbdgen name.
    #[must_use]
    pub fn platform(&self, name: &str) -> Option<&KbdgenPlatform> {
        match name {
            "macOS" => self.mac_os.as_ref(),
            "windows" => self.windows.as_ref(),
            "chromeOS" => self.chrome_os.as_ref(),
            "iOS" => self.i_os.as_ref(),
            "android" => self.android.as_ref(),
            _ => None,
        }
    }

    /// Lists the platforms present that the viewer supports
    /// (macOS, windows, chromeOS).
    #[must_use]
    pub fn available_platforms(&self) -> Vec<&'static str> {
        let mut platforms = Vec::new();
        if self.mac_os.is_some() {
            platforms.push("macOS");
        }
        if self.windows.is_some() {
            platforms.push("windows");
        }
        if self.chrome_os.is_some() {
            platforms.push("chromeOS");
        }
        platforms
    }
}

/// Per-platform section of a kbdgen layout.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KbdgenPlatform {
    /// Primary (hardware keyboard) definition
    pub primary: Option<KbdgenPrimary>,
    /// Platform-specific transforms; take precedence over the top-level map
    #[serde(default)]
    pub transforms: TransformTable,
    /// Space-bar outputs per layer (mobile platforms; carried for fidelity)
    #[serde(default)]
    pub space: HashMap<String, String>,
    /// Dead-key character lists per layer (carried for fidelity)
    #[serde(default, rename = "deadKeys")]
    pub dead_keys: HashMap<String, Vec<String>>,
}

/// The `primary` block of a platform section.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KbdgenPrimary {
    /// Layer name -> multi-line whitespace-tokenized layer string
    #[serde(default)]
    pub layers: HashMap<String, String>,
}

/// Physical positions of printable keys on an ISO keyboard, top row first.
/// The codes are the stable physical key codes used by presentation layers.
const ISO_ROW_1: &[&str] = &[
    "Backquote",
    "Digit1",
    "Digit2",
    "Digit3",
    "Digit4",
    "Digit5",
    "Digit6",
    "Digit7",
    "Digit8",
    "Digit9",
    "Digit0",
    "Minus",
    "Equal",
];
const ISO_ROW_2: &[&str] = &[
    "KeyQ",
    "KeyW",
    "KeyE",
    "KeyR",
    "KeyT",
    "KeyY",
    "KeyU",
    "KeyI",
    "KeyO",
    "KeyP",
    "BracketLeft",
    "BracketRight",
];
const ISO_ROW_3: &[&str] = &[
    "KeyA",
    "KeyS",
    "KeyD",
    "KeyF",
    "KeyG",
    "KeyH",
    "KeyJ",
    "KeyK",
    "KeyL",
    "Semicolon",
    "Quote",
    "Backslash",
];
const ISO_ROW_4: &[&str] = &[
    "IntlBackslash",
    "KeyZ",
    "KeyX",
    "KeyC",
    "KeyV",
    "KeyB",
    "KeyN",
    "KeyM",
    "Comma",
    "Period",
    "Slash",
];

/// Data rows in top-to-bottom order, aligned to layer-string line indices.
const ISO_DATA_ROWS: &[&[&str]] = &[ISO_ROW_1, ISO_ROW_2, ISO_ROW_3, ISO_ROW_4];

/// Layer names the transformer recognizes beyond `default`.
pub const RECOGNIZED_LAYERS: &[&str] = &[
    "shift",
    "caps",
    "caps+shift",
    "alt",
    "alt+shift",
    "ctrl",
    "ctrl+shift",
    "cmd",
    "cmd+shift",
    "cmd+alt",
    "cmd+alt+shift",
    "alt+caps",
];

fn backspace() -> Key {
    Key::new("Backspace", "\u{8}")
        .with_label("⌫")
        .with_width(2.0)
        .with_kind(KeyType::Modifier)
}

fn tab() -> Key {
    Key::new("Tab", "\t")
        .with_label("Tab")
        .with_width(1.5)
        .with_kind(KeyType::Modifier)
}

fn enter() -> Key {
    Key::new("Enter", "\n")
        .with_label("Enter")
        .with_width(1.3)
        .with_height(2.075)
        .with_kind(KeyType::Enter)
}

fn caps_lock() -> Key {
    Key::new("CapsLock", "")
        .with_label("Caps")
        .with_width(1.75)
        .with_kind(KeyType::Modifier)
}

fn modifier(id: &str, label: &str, width: f32) -> Key {
    Key::new(id, "")
        .with_label(label)
        .with_width(width)
        .with_kind(KeyType::Modifier)
}

fn space() -> Key {
    Key::new("Space", " ")
        .with_label("")
        .with_width(6.25)
        .with_kind(KeyType::Space)
}

/// Parses a kbdgen layer string into a 2D grid of tokens.
///
/// Each line is one keyboard row; tokens are whitespace-delimited.
///
/// ```
/// use kbdlens::parser::kbdgen::parse_layer_string;
///
/// let grid = parse_layer_string("' 1 2\nq w e");
/// assert_eq!(grid[0], vec!["'", "1", "2"]);
/// assert_eq!(grid[1], vec!["q", "w", "e"]);
/// ```
#[must_use]
pub fn parse_layer_string(layer: &str) -> Vec<Vec<String>> {
    layer
        .trim()
        .lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}

/// Extracts the layer strings and merged transform table for a platform.
///
/// Platform-specific transform entries take precedence over the top-level
/// (cross-platform) table on key collision.
fn extract_platform_data<'a>(
    data: &'a KbdgenLayout,
    platform: &str,
) -> Result<(&'a HashMap<String, String>, TransformTable), TransformError> {
    let platform_data = data
        .platform(platform)
        .ok_or_else(|| TransformError::PlatformNotFound {
            platform: platform.to_string(),
        })?;

    let layers = platform_data
        .primary
        .as_ref()
        .map(|primary| &primary.layers)
        .filter(|layers| layers.get(DEFAULT_LAYER).is_some_and(|s| !s.is_empty()))
        .ok_or_else(|| TransformError::MissingDefaultLayer {
            platform: platform.to_string(),
        })?;

    let mut transforms = data.transforms.clone();
    for (trigger, entries) in &platform_data.transforms {
        transforms.insert(trigger.clone(), entries.clone());
    }

    Ok((layers, transforms))
}

/// Builds one keyboard row of printable keys from the parsed layer grids.
///
/// Missing grid positions (short rows) yield an empty default output rather
/// than an error; this is deliberate best-effort handling of ragged data.
fn build_data_row(
    positions: &[&str],
    parsed: &HashMap<String, Vec<Vec<String>>>,
    row_idx: usize,
) -> Vec<Key> {
    positions
        .iter()
        .enumerate()
        .map(|(col, id)| {
            let default_output = parsed
                .get(DEFAULT_LAYER)
                .and_then(|grid| grid.get(row_idx))
                .and_then(|row| row.get(col))
                .cloned()
                .unwrap_or_default();

            let mut key = Key::new(*id, default_output);
            for layer in RECOGNIZED_LAYERS {
                let token = parsed
                    .get(*layer)
                    .and_then(|grid| grid.get(row_idx))
                    .and_then(|row| row.get(col));
                if let Some(token) = token {
                    if !token.is_empty() {
                        key = key.with_layer(*layer, token.clone());
                    }
                }
            }
            key
        })
        .collect()
}

/// Transforms a kbdgen layout into the normalized internal format.
///
/// # Arguments
///
/// * `data` - Parsed kbdgen YAML layout
/// * `platform` - Platform section to extract (e.g. "macOS", "windows")
/// * `repo_code` - Source repository code (e.g. "sme" for Northern Sami)
/// * `layout_name` - Layout variant name (e.g. "se-SE")
///
/// # Errors
///
/// [`TransformError::PlatformNotFound`] if the platform section is absent;
/// [`TransformError::MissingDefaultLayer`] if it lacks a default layer.
pub fn transform_layout(
    data: &KbdgenLayout,
    platform: &str,
    repo_code: &str,
    layout_name: &str,
) -> Result<KeyboardLayout, TransformError> {
    let (layers, dead_keys) = extract_platform_data(data, platform)?;

    // Parse every supplied layer string into a token grid
    let mut parsed: HashMap<String, Vec<Vec<String>>> = HashMap::new();
    for (name, layer_string) in layers {
        if !layer_string.is_empty() {
            parsed.insert(name.clone(), parse_layer_string(layer_string));
        }
    }

    let default_rows = parsed
        .get(DEFAULT_LAYER)
        .map_or(0, |grid| grid.len());

    let mut rows = Vec::new();

    // Row 1: number row + Backspace
    if default_rows > 0 {
        let mut keys = build_data_row(ISO_DATA_ROWS[0], &parsed, 0);
        keys.push(backspace());
        rows.push(KeyRow::new(keys));
    }

    // Row 2: Tab + QWERTY row + Enter
    if default_rows > 1 {
        let mut keys = vec![tab()];
        keys.extend(build_data_row(ISO_DATA_ROWS[1], &parsed, 1));
        keys.push(enter());
        rows.push(KeyRow::new(keys));
    }

    // Row 3: CapsLock + home row
    if default_rows > 2 {
        let mut keys = vec![caps_lock()];
        keys.extend(build_data_row(ISO_DATA_ROWS[2], &parsed, 2));
        rows.push(KeyRow::new(keys));
    }

    // Row 4: Shift + bottom letter row + Shift
    if default_rows > 3 {
        let mut keys = vec![modifier("ShiftLeft", "Shift", 1.25)];
        keys.extend(build_data_row(ISO_DATA_ROWS[3], &parsed, 3));
        keys.push(modifier("ShiftRight", "Shift", 2.75));
        rows.push(KeyRow::new(keys));
    }

    // Bottom modifier/space row, always present
    rows.push(KeyRow::new(vec![
        modifier("ControlLeft", "Ctrl", 1.25),
        modifier("MetaLeft", "⌘", 1.25),
        modifier("AltLeft", "Alt", 1.25),
        space(),
        modifier("AltRight", "Alt", 1.25),
        modifier("MetaRight", "⌘", 1.25),
        modifier("ControlRight", "Ctrl", 1.25),
    ]));

    let name = data
        .display_names
        .get("en")
        .cloned()
        .or_else(|| data.locale.clone())
        .unwrap_or_else(|| format!("{repo_code} - {layout_name} ({platform})"));

    Ok(KeyboardLayout {
        id: format!("{repo_code}-{layout_name}-{platform}"),
        name,
        rows,
        dead_keys,
    })
}

/// Parses kbdgen YAML from a string.
pub fn parse_kbdgen_str(content: &str) -> Result<KbdgenLayout> {
    serde_yml::from_str(content).context("Failed to parse kbdgen YAML")
}

/// Parses a kbdgen YAML layout file.
pub fn parse_kbdgen_file(path: &Path) -> Result<KbdgenLayout> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file: {}", path.display()))?;

    parse_kbdgen_str(&content)
        .with_context(|| format!("Failed to parse layout file: {}", path.display()))
}
