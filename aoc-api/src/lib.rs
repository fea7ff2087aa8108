//! Puzzle input fetching, caching, parsing and answer submission
//!
//! [`AocApi`] is the entry point for solution code:
//!
//! - [`AocApi::get_raw`] returns the raw input, fetched once and cached on disk
//!   as `cache-<year>-<day>.txt`
//! - [`AocApi::get_lines`] / [`AocApi::get_lines_mapped`] split it into lines
//! - [`AocApi::get_chunks`] / [`AocApi::get_chunks_mapped`] group lines into
//!   blank-line separated chunks
//! - [`AocApi::submit`] posts an answer, or only logs it unless confirmed
//!
//! The [`parse`] module holds the same views as pure functions over a string.

mod api;
mod cache;
mod config;
mod error;
pub mod parse;

pub use api::AocApi;
pub use cache::InputCache;
pub use config::{ApiConfig, DEFAULT_CACHE_DIR, DEFAULT_SESSION_PATH, DEFAULT_YEAR};
pub use error::{ApiError, CacheError};
