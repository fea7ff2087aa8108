//! Submission response parsing utilities

use crate::SubmissionOutcome;
use regex::Regex;
use scraper::{Html, Selector};
use std::cell::OnceCell;
use std::time::Duration;

const REJECTED_PHRASE: &str = "not the right answer";
const ACCEPTED_PHRASE: &str = "the right answer";
const RATE_LIMITED_PHRASE: &str = "too recently";

/// Maximum number of characters kept from an unrecognized response
const EXCERPT_LEN: usize = 200;

/// Parser for AOC submission responses with cached regex patterns and selectors
#[derive(Clone, Debug)]
pub(crate) struct ResponseParser {
    throttle_regex: OnceCell<Regex>,
    main_selector: OnceCell<Selector>,
}

impl ResponseParser {
    /// Create a new parser with uninitialized caches
    pub fn new() -> Self {
        Self {
            throttle_regex: OnceCell::new(),
            main_selector: OnceCell::new(),
        }
    }

    /// Get or compile the throttle duration regex
    fn throttle_regex(&self) -> &Regex {
        self.throttle_regex
            .get_or_init(|| Regex::new(r"You have (.+?) left to wait\.").unwrap())
    }

    /// Get or compile the main element selector
    fn main_selector(&self) -> &Selector {
        self.main_selector
            .get_or_init(|| Selector::parse("main").unwrap())
    }

    /// Extract text content from the main element, or `None` if there is none
    pub fn extract_main_text(&self, html: &str) -> Option<String> {
        let document = Html::parse_document(html);
        let main_element = document.select(self.main_selector()).next()?;
        Some(main_element.text().collect::<String>())
    }

    /// Readable text of a response: the `<main>` text if present, else the raw body
    fn readable_text(&self, body: &str) -> String {
        self.extract_main_text(body)
            .unwrap_or_else(|| body.to_string())
    }

    /// Extract throttle duration from response text
    fn extract_throttle_duration(&self, text: &str) -> Option<Duration> {
        let regex = self.throttle_regex();
        let captures = regex.captures(text)?;
        let duration_str = captures.get(1)?.as_str();
        humantime::parse_duration(duration_str).ok()
    }

    /// Classify a submission response body
    ///
    /// The raw body is scanned for the known phrases in priority order. The
    /// rejected phrase contains the accepted one, so it has to be checked first.
    pub fn parse_submission_response(&self, body: &str) -> SubmissionOutcome {
        if body.contains(REJECTED_PHRASE) {
            return SubmissionOutcome::Rejected;
        }

        if body.contains(ACCEPTED_PHRASE) {
            return SubmissionOutcome::Accepted;
        }

        if body.contains(RATE_LIMITED_PHRASE) {
            let wait_time = self.extract_throttle_duration(&self.readable_text(body));
            return SubmissionOutcome::RateLimited { wait_time };
        }

        SubmissionOutcome::Unrecognized {
            excerpt: excerpt(&self.readable_text(body)),
        }
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse whitespace and cut the text down to `EXCERPT_LEN` characters
fn excerpt(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.char_indices().nth(EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &collapsed[..idx]),
        None => collapsed,
    }
}
