//! Error types for insights-reviewer.

use thiserror::Error;

/// Main error type for reviewer operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed before a response was received
    #[error("HTTP error: {0}")]
    Http(String),

    /// GitHub returned a status code other than the expected one
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Input could not be interpreted
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for reviewer operations.
pub type Result<T> = std::result::Result<T, Error>;
