//! Error types for the AOC HTTP client

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when using the AOC HTTP client
#[derive(Error, Debug)]
pub enum AocError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid HTTP status code received
    #[error("Invalid HTTP status: {status}")]
    InvalidStatus {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Failed to decode response as UTF-8
    #[error("Failed to decode response as UTF-8")]
    Encoding,

    /// Session file could not be read
    #[error("Failed to read session file {}: {source}", .path.display())]
    Credential {
        /// Path of the session file
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Session contents cannot be sent as a cookie header
    #[error("Session cookie is not a valid header value (check for stray whitespace or newlines)")]
    InvalidCookie,

    /// Client initialization failed
    #[error("Client initialization failed: {0}")]
    ClientInit(String),
}
