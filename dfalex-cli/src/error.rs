//! Error handling module for the dfalex CLI.
//!
//! Lexical errors never surface here on their own: the scanner turns them
//! into tokens and diagnostics. `LexErrors` only exists so `--deny-errors`
//! can fail the process.

use thiserror::Error;

/// Main error type for the dfalex CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration could not be found, parsed or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error when input validation fails.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The input produced error tokens and errors were denied.
    #[error("{count} lexical error(s) found")]
    LexErrors {
        /// Number of error tokens.
        count: usize,
    },
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
