//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::path::PathBuf;

/// File-based cache for puzzle inputs
///
/// Layout: `{dir}/cache-{year}-{day}.txt`. Entries never expire; a file is
/// served verbatim until deleted by hand.
#[derive(Debug, Clone)]
pub struct InputCache {
    dir: PathBuf,
}

impl InputCache {
    /// Create a cache rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.dir.join(format!("cache-{}-{}.txt", year, day))
    }

    /// Check if input is cached
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.cache_path(year, day).exists()
    }

    /// Get cached input or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(year, day);
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Ok(Some(content))
        } else {
            Ok(None)
        }
    }

    /// Store input in cache, overwriting any existing entry
    ///
    /// The write is not atomic; an interrupted write leaves a truncated file
    /// that later reads will trust.
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        let path = self.cache_path(year, day);

        fs::create_dir_all(&self.dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", self.dir.display(), e))
        })?;

        fs::write(&path, input)?;
        Ok(())
    }
}
