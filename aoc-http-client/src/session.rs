//! Session credential loading

use crate::error::AocError;
use reqwest::header::HeaderValue;
use std::fmt;
use std::fs;
use std::path::Path;
use zeroize::Zeroizing;

/// A `session=<token>` cookie value
///
/// The token is kept verbatim: no whitespace is stripped when loading from
/// disk. The backing string is zeroized on drop.
#[derive(Clone)]
pub struct SessionCookie {
    value: Zeroizing<String>,
}

impl SessionCookie {
    /// Read the token from `path` and format it as a cookie value
    ///
    /// Every call re-reads the file, so a rotated token is picked up by the
    /// next call.
    ///
    /// # Errors
    ///
    /// Returns `AocError::Credential` if the file is missing or unreadable.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::SessionCookie;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let cookie = SessionCookie::load("./session")?;
    /// assert!(cookie.as_str().starts_with("session="));
    /// # Ok(())
    /// # }
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AocError> {
        let path = path.as_ref();
        let token = Zeroizing::new(fs::read_to_string(path).map_err(|source| {
            AocError::Credential {
                path: path.to_path_buf(),
                source,
            }
        })?);
        tracing::trace!(path = %path.display(), "Loaded session file");
        Ok(Self::from_token(&token))
    }

    /// Build a cookie from an in-memory token
    pub fn from_token(token: &str) -> Self {
        Self {
            value: Zeroizing::new(format!("session={}", token)),
        }
    }

    /// The full cookie value, `session=<token>`
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Create a sensitive header value for the `Cookie` header
    ///
    /// # Errors
    ///
    /// Returns `AocError::InvalidCookie` if the token contains bytes that are
    /// not allowed in a header, such as a trailing newline.
    pub fn header_value(&self) -> Result<HeaderValue, AocError> {
        let mut header_value =
            HeaderValue::from_bytes(self.value.as_bytes()).map_err(|_| AocError::InvalidCookie)?;
        header_value.set_sensitive(true);
        Ok(header_value)
    }
}

impl fmt::Debug for SessionCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCookie")
            .field("value", &"session=<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_formats_cookie() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session");
        fs::write(&path, "abc123").unwrap();

        let cookie = SessionCookie::load(&path).unwrap();
        assert_eq!(cookie.as_str(), "session=abc123");
    }

    #[test]
    fn test_load_keeps_whitespace() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session");
        fs::write(&path, "abc123\n").unwrap();

        let cookie = SessionCookie::load(&path).unwrap();
        assert_eq!(cookie.as_str(), "session=abc123\n");
        assert!(matches!(cookie.header_value(), Err(AocError::InvalidCookie)));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("does-not-exist");

        match SessionCookie::load(&path) {
            Err(AocError::Credential { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected Credential error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rereads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session");

        fs::write(&path, "first").unwrap();
        assert_eq!(SessionCookie::load(&path).unwrap().as_str(), "session=first");

        fs::write(&path, "second").unwrap();
        assert_eq!(SessionCookie::load(&path).unwrap().as_str(), "session=second");
    }

    #[test]
    fn test_header_value_is_sensitive() {
        let cookie = SessionCookie::from_token("deadbeef");
        let header = cookie.header_value().unwrap();
        assert!(header.is_sensitive());
        assert_eq!(header.to_str().unwrap(), "session=deadbeef");
    }

    #[test]
    fn test_debug_redacts_token() {
        let cookie = SessionCookie::from_token("deadbeef");
        let debug = format!("{:?}", cookie);
        assert!(!debug.contains("deadbeef"));
    }
}
