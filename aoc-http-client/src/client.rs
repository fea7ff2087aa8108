//! AOC HTTP client implementation

use crate::error::AocError;
use crate::parser::ResponseParser;
use crate::session::SessionCookie;
use std::time::Duration;

/// Default remote endpoint
pub const DEFAULT_BASE_URL: &str = "https://adventofcode.com";

/// Classified outcome of an answer submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The answer was correct
    Accepted,
    /// The answer was wrong
    Rejected,
    /// An answer was submitted too recently
    RateLimited {
        /// Wait time parsed from the response, if present
        wait_time: Option<Duration>,
    },
    /// None of the known phrases were found in the response
    Unrecognized {
        /// Whitespace-collapsed, truncated response text for inspection
        excerpt: String,
    },
}

/// Blocking HTTP client for the puzzle server
///
/// Each call performs exactly one request. Nothing is retried.
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::{AocClient, SessionCookie};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::new()?;
/// let cookie = SessionCookie::load("./session")?;
///
/// let input = client.get_input(2024, 1, &cookie)?;
/// println!("Input: {}", input);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct AocClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
    parser: ResponseParser,
}

impl AocClient {
    /// Create a new client with rustls-tls and the default base URL
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn new() -> Result<Self, AocError> {
        Self::builder().build()
    }

    /// Create a builder for configuring the client
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::AocClient;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::builder()
    ///     .base_url("http://localhost:1234")?
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn builder() -> AocClientBuilder {
        AocClientBuilder::new()
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &reqwest::Url {
        &self.base_url
    }

    /// Build `<base>/<year>/day/<day>/<leaf>`
    fn puzzle_url(&self, year: u16, day: u8, leaf: &str) -> Result<reqwest::Url, AocError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AocError::ClientInit("Cannot modify base URL path".to_string()))?
            .clear()
            .extend(&[&year.to_string(), "day", &day.to_string(), leaf]);
        Ok(url)
    }

    /// Fetch puzzle input for a specific year and day
    ///
    /// Issues `GET /<year>/day/<day>/input` with the session cookie attached.
    ///
    /// # Errors
    ///
    /// * `AocError::InvalidCookie` - Session contents are not a legal header value
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error (e.g., 404 if puzzle not available)
    /// * `AocError::Encoding` - Response is not valid UTF-8
    pub fn get_input(
        &self,
        year: u16,
        day: u8,
        cookie: &SessionCookie,
    ) -> Result<String, AocError> {
        let cookie_header = cookie.header_value()?;
        let url = self.puzzle_url(year, day, "input")?;

        tracing::debug!(%url, "Fetching puzzle input");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::COOKIE, cookie_header)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        read_utf8(response)
    }

    /// Submit an answer for a puzzle level
    ///
    /// Issues `POST /<year>/day/<day>/answer` with form fields `level` and
    /// `answer`. The level is sent verbatim and is not range-checked.
    ///
    /// # Errors
    ///
    /// * `AocError::InvalidCookie` - Session contents are not a legal header value
    /// * `AocError::Request` - Network error
    /// * `AocError::InvalidStatus` - HTTP error
    /// * `AocError::Encoding` - Response is not valid UTF-8
    ///
    /// # Example
    ///
    /// ```no_run
    /// use aoc_http_client::{AocClient, SessionCookie, SubmissionOutcome};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = AocClient::new()?;
    /// let cookie = SessionCookie::load("./session")?;
    ///
    /// match client.submit_answer(2024, 1, 1, "42", &cookie)? {
    ///     SubmissionOutcome::Accepted => println!("Correct!"),
    ///     SubmissionOutcome::Rejected => println!("Try again"),
    ///     SubmissionOutcome::RateLimited { wait_time } => println!("Wait: {:?}", wait_time),
    ///     SubmissionOutcome::Unrecognized { excerpt } => println!("Unknown: {}", excerpt),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn submit_answer(
        &self,
        year: u16,
        day: u8,
        level: u8,
        answer: &str,
        cookie: &SessionCookie,
    ) -> Result<SubmissionOutcome, AocError> {
        let cookie_header = cookie.header_value()?;
        let url = self.puzzle_url(year, day, "answer")?;

        let form = [("level", level.to_string()), ("answer", answer.to_string())];

        tracing::debug!(%url, level, "Submitting answer");
        let response = self
            .client
            .post(url)
            .header(reqwest::header::COOKIE, cookie_header)
            .form(&form)
            .send()?;

        if !response.status().is_success() {
            return Err(AocError::InvalidStatus {
                status: response.status(),
            });
        }

        let body = read_utf8(response)?;
        Ok(self.parser.parse_submission_response(&body))
    }
}

/// Read the whole body, rejecting invalid UTF-8 instead of replacing it
fn read_utf8(response: reqwest::blocking::Response) -> Result<String, AocError> {
    let bytes = response.bytes()?;
    String::from_utf8(bytes.to_vec()).map_err(|_| AocError::Encoding)
}

/// Builder for configuring an AOC HTTP client
///
/// # Example
///
/// ```no_run
/// use aoc_http_client::AocClient;
/// use std::time::Duration;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AocClient::builder()
///     .base_url("http://localhost:1234")?
///     .user_agent("github.com/me/my-aoc by me@example.com")
///     .client_builder(
///         reqwest::blocking::Client::builder()
///             .timeout(Duration::from_secs(10))
///     )
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct AocClientBuilder {
    base_url: Option<reqwest::Url>,
    user_agent: Option<String>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl AocClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom base URL for the client
    ///
    /// The URL is parsed at builder time, so a malformed URL fails early.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, AocError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Set the `User-Agent` header sent with every request
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set a custom HTTP client builder (timeouts, proxies, etc.)
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    /// Build the client
    ///
    /// # Errors
    ///
    /// Returns `AocError::ClientInit` if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AocClient, AocError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AocError::ClientInit(e.to_string()))?,
        };

        let mut builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|e| AocError::ClientInit(e.to_string()))?;

        Ok(AocClient {
            client,
            base_url,
            parser: ResponseParser::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn mock_client(server: &mockito::Server) -> AocClient {
        AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .build()
            .unwrap()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_base_url_configuration(
            scheme in prop::sample::select(vec!["http", "https"]),
            host in "[a-z]{3,10}",
            port in 1000u16..10000u16,
        ) {
            let base_url = format!("{}://{}:{}", scheme, host, port);

            let client = AocClient::builder()
                .base_url(&base_url)
                .unwrap()
                .build()
                .unwrap();

            prop_assert_eq!(client.base_url.scheme(), scheme);
            prop_assert_eq!(client.base_url.host_str(), Some(host.as_str()));
            prop_assert_eq!(client.base_url.port(), Some(port));
        }
    }

    #[test]
    fn test_default_base_url() {
        let client = AocClient::builder().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://adventofcode.com/");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = AocClient::builder().base_url("not a valid url");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_agent_is_sent() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2024/day/1/input")
            .match_header("user-agent", "my-aoc-tests")
            .with_status(200)
            .with_body("1\n")
            .expect(1)
            .create();

        let client = AocClient::builder()
            .base_url(server.url())
            .unwrap()
            .user_agent("my-aoc-tests")
            .build()
            .unwrap();

        let cookie = SessionCookie::from_token("abc");
        assert_eq!(client.get_input(2024, 1, &cookie).unwrap(), "1\n");
        mock.assert();
    }

    #[test]
    fn test_get_input_sends_cookie() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2024/day/7/input")
            .match_header("cookie", "session=abc123")
            .with_status(200)
            .with_body("190: 10 19\n")
            .expect(1)
            .create();

        let client = mock_client(&server);
        let cookie = SessionCookie::from_token("abc123");

        assert_eq!(client.get_input(2024, 7, &cookie).unwrap(), "190: 10 19\n");
        mock.assert();
    }

    #[test]
    fn test_invalid_utf8_input_is_encoding_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/2024/day/1/input")
            .with_status(200)
            .with_header("content-type", "text/plain; charset=utf-8")
            .with_body(vec![b'1', 0xff, 0xfe, b'\n'])
            .expect(1)
            .create();

        let client = mock_client(&server);
        let cookie = SessionCookie::from_token("abc");

        assert!(matches!(
            client.get_input(2024, 1, &cookie),
            Err(AocError::Encoding)
        ));
        mock.assert();
    }

    #[test]
    fn test_invalid_utf8_submission_is_encoding_error() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2024/day/1/answer")
            .with_status(200)
            .with_body(vec![b'1', 0xff])
            .expect(1)
            .create();

        let client = mock_client(&server);
        let cookie = SessionCookie::from_token("abc");

        assert!(matches!(
            client.submit_answer(2024, 1, 1, "11", &cookie),
            Err(AocError::Encoding)
        ));
        mock.assert();
    }

    #[test]
    fn test_invalid_cookie_sends_nothing() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create();

        let client = mock_client(&server);
        let cookie = SessionCookie::from_token("abc123\n");

        assert!(matches!(
            client.get_input(2024, 1, &cookie),
            Err(AocError::InvalidCookie)
        ));
        mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_input_url_construction(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .with_status(200)
                .with_body("test input data")
                .expect(1)
                .create();

            let client = mock_client(&server);
            let cookie = SessionCookie::from_token(&session);

            let result = client.get_input(year, day, &cookie);

            prop_assert!(result.is_ok(), "get_input should succeed for year {} day {}", year, day);
            mock.assert();
            prop_assert_eq!(result.unwrap(), "test input data");
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_submission_request_construction(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            level in 1u8..=2u8,
            answer in "[0-9]{1,10}",
            session in "[a-f0-9]{32,128}",
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/answer", year, day);
            let mock = server.mock("POST", expected_path.as_str())
                .match_header("cookie", format!("session={}", session).as_str())
                .match_body(
                    mockito::Matcher::AllOf(vec![
                        mockito::Matcher::UrlEncoded("level".into(), level.to_string()),
                        mockito::Matcher::UrlEncoded("answer".into(), answer.clone()),
                    ])
                )
                .with_status(200)
                .with_body(r#"<html><body><main>That's the right answer!</main></body></html>"#)
                .expect(1)
                .create();

            let client = mock_client(&server);
            let cookie = SessionCookie::from_token(&session);

            let result = client.submit_answer(year, day, level, &answer, &cookie);

            prop_assert!(result.is_ok(), "submit_answer should succeed");
            mock.assert();
            prop_assert_eq!(result.unwrap(), SubmissionOutcome::Accepted);
        }
    }

    #[test]
    fn test_out_of_range_level_is_passed_through() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/2024/day/1/answer")
            .match_body(mockito::Matcher::UrlEncoded("level".into(), "7".into()))
            .with_status(200)
            .with_body("<main>You don't seem to be solving the right level.</main>")
            .expect(1)
            .create();

        let client = mock_client(&server);
        let cookie = SessionCookie::from_token("abc");

        let outcome = client.submit_answer(2024, 1, 7, "11", &cookie).unwrap();
        assert!(matches!(outcome, SubmissionOutcome::Unrecognized { .. }));
        mock.assert();
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_non_success_status_error_handling(
            year in 2015u16..2030u16,
            day in 1u8..=25u8,
            status_code in prop::sample::select(vec![400, 401, 403, 404, 429, 500, 502, 503, 504]),
        ) {
            let mut server = mockito::Server::new();

            let expected_path = format!("/{}/day/{}/input", year, day);
            let mock = server.mock("GET", expected_path.as_str())
                .with_status(status_code)
                .with_body("Error response")
                .expect(1)
                .create();

            let client = mock_client(&server);
            let cookie = SessionCookie::from_token("abc");

            match client.get_input(year, day, &cookie) {
                Err(AocError::InvalidStatus { status }) => {
                    prop_assert_eq!(status.as_u16(), status_code as u16);
                }
                other => prop_assert!(false, "Expected AocError::InvalidStatus, got {:?}", other),
            }

            mock.assert();
        }
    }
}
