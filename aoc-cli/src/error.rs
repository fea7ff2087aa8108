//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// API error (credential, transport, cache, or submission)
    #[error("{0}")]
    Api(#[from] aoc_api::ApiError),

    /// No solution registered for the requested puzzle
    #[error("No solution registered for {year}/{day:02}{}", .part.map(|p| format!(" part {}", p)).unwrap_or_default())]
    NoSolution {
        year: u16,
        day: u8,
        part: Option<u8>,
    },

    /// Solution failed on the puzzle input
    #[error("Solution failed for {year}/{day:02} part {part}: {message}")]
    Solve {
        year: u16,
        day: u8,
        part: u8,
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
