//! Cached fetch and submission facade

use crate::cache::InputCache;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::parse;
use aoc_http_client::{AocClient, SessionCookie, SubmissionOutcome};
use std::fmt::Display;
use std::path::PathBuf;

/// Caller-facing puzzle API
///
/// Combines the HTTP client, the on-disk input cache and the session file.
/// Every operation is synchronous and performs at most one request.
///
/// # Example
///
/// ```no_run
/// use aoc_api::{AocApi, ApiConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let api = AocApi::new(ApiConfig::default())?;
///
/// let numbers = api.get_lines_mapped(1, 2024, |line| line.parse::<i64>())??;
/// let total: i64 = numbers.iter().sum();
///
/// // Dry run: logs the answer, touches nothing
/// api.submit(1, 1, total, false, 2024)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AocApi {
    client: AocClient,
    cache: InputCache,
    session_path: PathBuf,
}

impl AocApi {
    /// Build the API from a resolved configuration
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let mut builder = AocClient::builder().base_url(config.base_url.as_str())?;
        if let Some(user_agent) = config.user_agent {
            builder = builder.user_agent(user_agent);
        }

        Ok(Self::with_client(
            builder.build()?,
            InputCache::new(config.cache_dir),
            config.session_path,
        ))
    }

    /// Build the API from already constructed parts
    pub fn with_client(client: AocClient, cache: InputCache, session_path: PathBuf) -> Self {
        Self {
            client,
            cache,
            session_path,
        }
    }

    /// The input cache backing [`get_raw`](Self::get_raw)
    pub fn cache(&self) -> &InputCache {
        &self.cache
    }

    /// Load the session cookie; re-read from disk on every call
    pub fn load_session_cookie(&self) -> Result<SessionCookie, ApiError> {
        Ok(SessionCookie::load(&self.session_path)?)
    }

    /// Raw puzzle input, served from the cache when present
    ///
    /// A cache miss performs exactly one GET and writes the body to the cache
    /// before returning it. Cached entries are trusted verbatim.
    pub fn get_raw(&self, day: u8, year: u16) -> Result<String, ApiError> {
        if let Some(cached) = self.cache.get(year, day)? {
            tracing::debug!(year, day, "Input served from cache");
            return Ok(cached);
        }

        tracing::debug!(year, day, "Input not cached, fetching");
        let cookie = self.load_session_cookie()?;
        let input = self.client.get_input(year, day, &cookie)?;
        self.cache.put(year, day, &input)?;
        tracing::debug!(
            year,
            day,
            path = %self.cache.cache_path(year, day).display(),
            "Input cached"
        );

        Ok(input)
    }

    /// Input split into lines, one trailing empty line dropped
    pub fn get_lines(&self, day: u8, year: u16) -> Result<Vec<String>, ApiError> {
        let raw = self.get_raw(day, year)?;
        Ok(parse::lines(&raw).into_iter().map(str::to_string).collect())
    }

    /// Input lines mapped through `mapper`; the first mapper error aborts
    ///
    /// The outer `Result` carries fetch errors, the inner one mapper errors.
    pub fn get_lines_mapped<T, E, F>(
        &self,
        day: u8,
        year: u16,
        mapper: F,
    ) -> Result<Result<Vec<T>, E>, ApiError>
    where
        F: FnMut(&str) -> Result<T, E>,
    {
        let raw = self.get_raw(day, year)?;
        Ok(parse::lines_mapped(&raw, mapper))
    }

    /// Input grouped into blank-line separated chunks
    pub fn get_chunks(&self, day: u8, year: u16) -> Result<Vec<Vec<String>>, ApiError> {
        let raw = self.get_raw(day, year)?;
        Ok(parse::chunks(&raw)
            .into_iter()
            .map(|chunk| chunk.into_iter().map(str::to_string).collect())
            .collect())
    }

    /// Input chunks mapped through `mapper`; the first mapper error aborts
    ///
    /// The outer `Result` carries fetch errors, the inner one mapper errors.
    pub fn get_chunks_mapped<T, E, F>(
        &self,
        day: u8,
        year: u16,
        mapper: F,
    ) -> Result<Result<Vec<T>, E>, ApiError>
    where
        F: FnMut(&[&str]) -> Result<T, E>,
    {
        let raw = self.get_raw(day, year)?;
        Ok(parse::chunks_mapped(&raw, mapper))
    }

    /// Submit an answer, returning whether it was accepted
    ///
    /// Unless `confirm` is set nothing is sent: a dry-run notice is logged and
    /// `false` is returned. `level` is passed through without validation.
    ///
    /// # Errors
    ///
    /// * `ApiError::Http` - Missing session file or failed request
    /// * `ApiError::RateLimited` - An answer was submitted too recently
    /// * `ApiError::UnrecognizedResponse` - The response matched no known phrase
    pub fn submit(
        &self,
        day: u8,
        level: u8,
        answer: impl Display,
        confirm: bool,
        year: u16,
    ) -> Result<bool, ApiError> {
        let answer = answer.to_string();

        if !confirm {
            tracing::info!(
                year,
                day,
                level,
                %answer,
                "{} - not actually submitting ({}-{} part {})",
                answer,
                year,
                day,
                level
            );
            return Ok(false);
        }

        let cookie = self.load_session_cookie()?;
        match self
            .client
            .submit_answer(year, day, level, &answer, &cookie)?
        {
            SubmissionOutcome::Rejected => {
                tracing::warn!("{} is wrong for {}-{} (part {})... :(", answer, year, day, level);
                Ok(false)
            }
            SubmissionOutcome::Accepted => {
                tracing::info!("⭐⭐⭐ You got it! For {}-{} (part {}) ⭐⭐⭐", year, day, level);
                Ok(true)
            }
            SubmissionOutcome::RateLimited { wait_time } => {
                Err(ApiError::RateLimited { wait_time })
            }
            SubmissionOutcome::Unrecognized { excerpt } => {
                Err(ApiError::UnrecognizedResponse { excerpt })
            }
        }
    }
}
