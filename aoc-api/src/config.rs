//! API configuration

use aoc_http_client::DEFAULT_BASE_URL;
use std::path::PathBuf;

/// Default location of the session token file
pub const DEFAULT_SESSION_PATH: &str = "./session";

/// Default cache directory (the working directory)
pub const DEFAULT_CACHE_DIR: &str = ".";

/// Year used when a caller does not pick one
pub const DEFAULT_YEAR: u16 = 2024;

/// Resolved configuration for [`AocApi`](crate::AocApi)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Server base URL
    pub base_url: String,
    /// File holding the session token, re-read on every request
    pub session_path: PathBuf,
    /// Directory holding `cache-<year>-<day>.txt` files
    pub cache_dir: PathBuf,
    /// Optional `User-Agent` header
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_path: PathBuf::from(DEFAULT_SESSION_PATH),
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            user_agent: None,
        }
    }
}
