//! Keyboard visual renderer for terminal output.
//!
//! Generates Unicode keyboard diagrams using box-drawing characters, one
//! box row per physical key row, with key cell widths proportional to the
//! width multipliers. Dead-key triggers are marked with a trailing `°`.

use std::fmt::Write;

use crate::models::{KeyRow, KeyboardLayout};
use crate::services::layers::layer_display_name;

/// Characters of cell interior per keyboard-width unit.
const CHARS_PER_UNIT: f32 = 8.0;
/// Minimum interior width of a key cell.
const MIN_CELL_WIDTH: usize = 4;

/// Renders a single layer of a layout as a Unicode keyboard diagram.
///
/// # Example output
///
/// ```text
/// Layer: Shift
/// ┌────────┬────────┬────────┐
/// │   Q    │   W    │   E    │
/// └────────┴────────┴────────┘
/// ```
#[must_use]
pub fn render_layer_diagram(layout: &KeyboardLayout, layer: &str) -> String {
    let mut output = String::new();
    writeln!(output, "Layer: {}", layer_display_name(layer)).unwrap();

    for row in &layout.rows {
        output.push_str(&render_row(layout, row, layer));
    }

    output
}

fn cell_width(width_multiplier: f32) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let chars = (width_multiplier * CHARS_PER_UNIT).round() as usize;
    chars.max(MIN_CELL_WIDTH)
}

fn render_row(layout: &KeyboardLayout, row: &KeyRow, layer: &str) -> String {
    let indent = row.offset.map_or(0, |offset| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let chars = (offset * CHARS_PER_UNIT).round() as usize;
        chars
    });
    let pad = " ".repeat(indent);

    let mut top = String::from("┌");
    let mut mid = String::from("│");
    let mut bottom = String::from("└");

    for (idx, key) in row.keys.iter().enumerate() {
        let width = cell_width(key.width);

        let mut label = key.display_label(layer);
        if key
            .output_for(layer)
            .is_some_and(|out| layout.is_dead_key(out))
        {
            label.push('°');
        }

        let label_len = label.chars().count().min(width);
        let truncated: String = label.chars().take(label_len).collect();
        let left = (width - label_len) / 2;
        let right = width - label_len - left;

        top.push_str(&"─".repeat(width));
        mid.push_str(&" ".repeat(left));
        mid.push_str(&truncated);
        mid.push_str(&" ".repeat(right));
        bottom.push_str(&"─".repeat(width));

        if idx + 1 < row.keys.len() {
            top.push('┬');
            mid.push('│');
            bottom.push('┴');
        }
    }

    top.push('┐');
    mid.push('│');
    bottom.push('┘');

    format!("{pad}{top}\n{pad}{mid}\n{pad}{bottom}\n")
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::Key;

    fn small_layout() -> KeyboardLayout {
        let mut acute = HashMap::new();
        acute.insert("a".to_string(), "á".to_string());
        let mut dead_keys = HashMap::new();
        dead_keys.insert("´".to_string(), acute);

        KeyboardLayout {
            id: "test".to_string(),
            name: "Test".to_string(),
            rows: vec![KeyRow::new(vec![
                Key::new("KeyQ", "q").with_layer("shift", "Q"),
                Key::new("Quote", "´"),
            ])],
            dead_keys,
        }
    }

    #[test]
    fn test_diagram_header_and_labels() {
        let diagram = render_layer_diagram(&small_layout(), "shift");
        assert!(diagram.starts_with("Layer: Shift\n"));
        assert!(diagram.contains('Q'));
        assert!(diagram.contains('┌'));
        assert!(diagram.contains('┘'));
    }

    #[test]
    fn test_dead_key_marked() {
        let diagram = render_layer_diagram(&small_layout(), "default");
        assert!(diagram.contains("´°"));
    }

    #[test]
    fn test_wide_key_renders_wider() {
        let layout = KeyboardLayout {
            id: "t".to_string(),
            name: "T".to_string(),
            rows: vec![KeyRow::new(vec![
                Key::new("Space", " ").with_width(6.25).with_label("")
            ])],
            dead_keys: HashMap::new(),
        };

        let diagram = render_layer_diagram(&layout, "default");
        let top = diagram.lines().nth(1).unwrap();
        assert_eq!(top.chars().count(), 52); // 6.25 * 8 = 50 interior + 2 borders
    }
}
