//! Configuration resolution from CLI args

use crate::cli::Args;
use aoc_api::ApiConfig;
use std::path::{Path, PathBuf};

/// Resolve the API configuration, expanding `~` in paths
pub fn api_config(args: &Args) -> ApiConfig {
    ApiConfig {
        base_url: args.base_url.clone(),
        session_path: expand_tilde(&args.session_file),
        cache_dir: expand_tilde(&args.cache_dir),
        user_agent: args.user_agent.clone(),
    }
}

/// Default log filter when `RUST_LOG` is not set
pub fn default_log_level(quiet: bool, verbose: u8) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && let Some(rest) = path_str.strip_prefix('~')
        && (rest.is_empty() || rest.starts_with('/'))
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest.trim_start_matches('/'));
    }
    path.to_path_buf()
}
