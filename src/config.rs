//! Configuration management for the application.
//!
//! Loads and saves application configuration in TOML format with
//! platform-specific directory resolution.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PLATFORM;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Platform section to use when a command does not specify one
    pub default_platform: String,
    /// Directory searched for layout YAML files given by bare name
    pub layouts_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_platform: DEFAULT_PLATFORM.to_string(),
            layouts_dir: None,
        }
    }
}

impl Config {
    /// Gets the configuration directory path.
    ///
    /// - Linux: `~/.config/kbdlens/`
    /// - macOS: `~/Library/Application Support/kbdlens/`
    /// - Windows: `%APPDATA%\kbdlens\`
    pub fn config_dir() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine config directory")?;
        Ok(base.join("kbdlens"))
    }

    /// Gets the configuration file path.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads the configuration, falling back to defaults when the file
    /// does not exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Saves the configuration, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_file()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}
