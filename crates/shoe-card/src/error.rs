//! Card error types.
//!
//! Rendering itself is infallible. Errors only come from the boundaries:
//! reading configuration and deserializing catalog input.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for card boundary operations.
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors raised while loading configuration or catalog input.
#[derive(Error, Debug)]
pub enum CardError {
    /// Failed to read a file.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed TOML configuration.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed JSON configuration or product input.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
