//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (file names, SMTP defaults, thresholds)
//! - CLI option types and parsing
//! - The resolved [`Config`] passed to every command handler

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{
    AddArgs, Cli, Command, Config, ConfigureArgs, LogFormat, LogLevel, RemoveArgs, ScanOptions,
};
