//! Core error types for the impact calculator.
//!
//! The calculator performs no I/O of its own; the only failures it raises are
//! rejected donation amounts. Configuration loading adds the config variants.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the impact core.
#[derive(Error, Debug)]
pub enum Error {
    /// Amount is negative, non-numeric, or non-finite.
    #[error("Invalid donation amount: {0}")]
    InvalidAmount(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

impl Error {
    /// True when the caller should surface this as a form validation message.
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::InvalidAmount(_))
    }
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
