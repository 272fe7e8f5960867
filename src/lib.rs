//! Kbdlens Library
//!
//! This library provides core functionality for the Kbdlens keyboard
//! layout viewer, including parsing kbdgen layout bundles, resolving
//! modifier states to layers, and simulating key presses with dead-key
//! composition.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod parser;
pub mod services;
