//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A complete kbdgen layout with four data rows, a shift layer, and dead
/// keys on both the top-level and macOS-specific transform tables. The
/// acute accent sits on the Quote position of the home row.
pub fn sample_kbdgen_yaml() -> &'static str {
    r#"
displayNames:
  en: Test Northern Sami
locale: se-SE
transforms:
  "´":
    a: á
    A: Á
    e: é
macOS:
  primary:
    layers:
      default: |
        § 1 2 3 4 5 6 7 8 9 0 - =
        q w e r t y u i o p å ŋ
        a s d f g h j k l ö ´ '
        < z x c v b n m , . /
      shift: |
        ° ! " # $ % & / ( ) = ? `
        Q W E R T Y U I O P Å Ŋ
        A S D F G H J K L Ö ¨ *
        > Z X C V B N M ; : _
windows:
  primary:
    layers:
      default: |
        § 1 2 3 4 5 6 7 8 9 0 - =
"#
}

/// Writes YAML content to a temporary layout file.
///
/// Returns the file path together with the `TempDir` guard; the caller
/// must keep the guard alive for the duration of the test.
pub fn create_temp_layout_file(content: &str) -> (PathBuf, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("layout.yaml");
    fs::write(&path, content).expect("Failed to write layout file");
    (path, dir)
}
