//! Error types for the puzzle API

use std::time::Duration;
use thiserror::Error;

/// Main API error type
#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing credential or failed request
    #[error("HTTP client error: {0}")]
    Http(#[from] aoc_http_client::AocError),

    /// Cache error
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    /// The server refused the submission because one was made too recently
    #[error("Submitted too recently{}", format_wait(.wait_time))]
    RateLimited { wait_time: Option<Duration> },

    /// The submission response matched none of the known phrases
    #[error("Got neither right nor wrong answer: {excerpt}")]
    UnrecognizedResponse { excerpt: String },
}

/// Cache-specific errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Cache directory creation failed
    #[error("Cache directory creation failed: {0}")]
    DirCreation(String),
}

fn format_wait(wait_time: &Option<Duration>) -> String {
    match wait_time {
        Some(wait) => format!(" (wait {}s)", wait.as_secs()),
        None => String::new(),
    }
}
