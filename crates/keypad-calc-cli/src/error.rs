//! CLI error types

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// Label matched no keypad button (only raised with `--strict`)
    #[error("Unknown button label: {label}")]
    UnknownButton {
        /// The rejected label
        label: String,
    },

    /// Subscriber installation failed
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an unknown-button error
    #[must_use]
    pub fn unknown_button(label: impl Into<String>) -> Self {
        Self::UnknownButton {
            label: label.into(),
        }
    }
}
