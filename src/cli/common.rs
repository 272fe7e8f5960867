//! Shared CLI error handling and layout-loading plumbing.

use std::fmt;
use std::path::PathBuf;

use clap::Args;

use crate::config::Config;
use crate::models::KeyboardLayout;
use crate::parser;

/// Category of a CLI failure, used to pick exit messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliErrorKind {
    /// File system or serialization failure
    Io,
    /// Input data could not be parsed or transformed
    Parse,
    /// Invalid command usage or arguments
    Usage,
}

/// A CLI command failure with a user-visible message.
#[derive(Debug, Clone)]
pub struct CliError {
    /// Failure category
    pub kind: CliErrorKind,
    /// User-visible message printed to stderr
    pub message: String,
}

impl CliError {
    /// An I/O or serialization failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// A parse or transform failure.
    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Parse,
            message: message.into(),
        }
    }

    /// A usage failure.
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Usage,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Arguments shared by every command that loads and transforms a layout.
#[derive(Debug, Clone, Args)]
pub struct LayoutSource {
    /// Path to kbdgen layout YAML file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Platform section to extract (e.g. "macOS", "windows");
    /// defaults to the configured platform
    #[arg(short, long, value_name = "NAME")]
    pub platform: Option<String>,

    /// Source repository code used in the synthesized layout id
    #[arg(long, value_name = "CODE", default_value = "local")]
    pub repo: String,

    /// Layout variant name; defaults to the file stem
    #[arg(long, value_name = "NAME")]
    pub layout_name: Option<String>,
}

impl LayoutSource {
    /// The platform to use, falling back to the configured default.
    pub fn resolved_platform(&self) -> CliResult<String> {
        if let Some(platform) = &self.platform {
            return Ok(platform.clone());
        }
        let config = Config::load().map_err(|e| CliError::io(format!("{e:#}")))?;
        Ok(config.default_platform)
    }

    /// The layout variant name, falling back to the file stem.
    #[must_use]
    pub fn resolved_layout_name(&self) -> String {
        self.layout_name.clone().unwrap_or_else(|| {
            self.file
                .file_stem()
                .map(|stem| stem.to_string_lossy().to_string())
                .unwrap_or_else(|| "layout".to_string())
        })
    }

    /// Resolves the file path, searching the configured layouts directory
    /// for bare relative names that do not exist as given.
    pub fn resolved_file(&self) -> CliResult<PathBuf> {
        if self.file.exists() {
            return Ok(self.file.clone());
        }
        if self.file.is_relative() {
            let config = Config::load().map_err(|e| CliError::io(format!("{e:#}")))?;
            if let Some(dir) = config.layouts_dir {
                let candidate = dir.join(&self.file);
                if candidate.exists() {
                    return Ok(candidate);
                }
            }
        }
        Err(CliError::io(format!(
            "Layout file not found: {}",
            self.file.display()
        )))
    }

    /// Loads the raw kbdgen data for the file.
    pub fn load_raw(&self) -> CliResult<parser::KbdgenLayout> {
        let path = self.resolved_file()?;
        parser::parse_kbdgen_file(&path).map_err(|e| CliError::parse(format!("{e:#}")))
    }

    /// Loads and transforms the layout for the resolved platform.
    pub fn load(&self) -> CliResult<KeyboardLayout> {
        let raw = self.load_raw()?;
        let platform = self.resolved_platform()?;
        parser::transform_layout(&raw, &platform, &self.repo, &self.resolved_layout_name())
            .map_err(|e| CliError::parse(e.to_string()))
    }
}

/// Parses a comma-separated modifier list into a `ModifierState`.
pub fn parse_modifiers(spec: &str) -> CliResult<crate::models::ModifierState> {
    let mut state = crate::models::ModifierState::new();
    for name in spec.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        apply_modifier(&mut state, name)?;
    }
    Ok(state)
}

/// Sets a single named modifier flag.
pub fn apply_modifier(state: &mut crate::models::ModifierState, name: &str) -> CliResult<()> {
    match name {
        "shift" => state.shift = true,
        "caps" => state.caps = true,
        "alt" => state.alt = true,
        "cmd" => state.cmd = true,
        "ctrl" => state.ctrl = true,
        other => {
            return Err(CliError::usage(format!(
                "Unknown modifier '{other}' (expected shift, caps, alt, cmd, or ctrl)"
            )))
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_modifiers() {
        let state = parse_modifiers("shift, caps").unwrap();
        assert!(state.shift);
        assert!(state.caps);
        assert!(!state.alt);
    }

    #[test]
    fn test_parse_modifiers_empty() {
        let state = parse_modifiers("").unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_parse_modifiers_unknown() {
        let err = parse_modifiers("hyper").unwrap_err();
        assert_eq!(err.kind, CliErrorKind::Usage);
    }
}
