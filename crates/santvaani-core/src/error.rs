//! Santvaani error type — one enum for the whole workspace.

use thiserror::Error;

/// Result alias used across all Santvaani crates.
pub type Result<T> = std::result::Result<T, SantvaaniError>;

/// All the ways a Santvaani operation can fail.
#[derive(Debug, Error)]
pub enum SantvaaniError {
    /// Configuration load/parse failure.
    #[error("Config error: {0}")]
    Config(String),

    /// Push provider call failed (network, auth, API error).
    #[error("Push error: {0}")]
    Push(String),

    /// Email provider call failed.
    #[error("Email error: {0}")]
    Email(String),

    /// Panchang data source failure.
    #[error("Panchang error: {0}")]
    Panchang(String),

    /// Caller supplied invalid input (empty token, malformed address).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
