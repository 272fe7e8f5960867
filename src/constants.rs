//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and default selection values.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Kbdlens";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "kbdlens";

/// Platform section used when the caller does not specify one.
pub const DEFAULT_PLATFORM: &str = "macOS";

/// The layer every key is guaranteed to define.
pub const DEFAULT_LAYER: &str = "default";
