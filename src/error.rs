//! Custom error types for studypoints
//!
//! The exchange flow itself never fails; these errors cover the application
//! around it (configuration, terminal, command-line input).

use thiserror::Error;

/// Main error type for the studypoints application
#[derive(Error, Debug)]
pub enum PointsError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}\n\n  → Fix the file or run 'studypoints config remove <key>' to reset a value.")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for PointsError {
    fn from(err: toml::de::Error) -> Self {
        PointsError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for PointsError {
    fn from(err: toml::ser::Error) -> Self {
        PointsError::Toml(err.to_string())
    }
}

/// Result type alias using PointsError
pub type Result<T> = std::result::Result<T, PointsError>;
