//! Error handling module for the wiigt CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;

/// Main error type for the wiigt CLI application.
#[derive(Error, Debug)]
pub enum WiigtError {
    /// Error when configuration is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when a configuration file cannot be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Error when `check` finds unrecognized characters.
    #[error("found {count} illegal token(s)")]
    IllegalTokens {
        /// Number of illegal tokens across all inputs.
        count: usize,
    },
}

/// Result type alias using WiigtError.
pub type Result<T> = std::result::Result<T, WiigtError>;
