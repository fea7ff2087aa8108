//! AOC HTTP Client Library
//!
//! Blocking client for the puzzle server: loads the session credential,
//! fetches puzzle input and submits answers.
//!
//! # Features
//!
//! - Session cookie loaded fresh from disk on every call, zeroized on drop
//! - Puzzle input fetching for any year and day
//! - Answer submission classified into a [`SubmissionOutcome`]
//! - Secure TLS using rustls (no OpenSSL dependencies)
//! - Blocking synchronous API, one request per call and no retries
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_http_client::{AocClient, SessionCookie, SubmissionOutcome};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = AocClient::new()?;
//! let cookie = SessionCookie::load("./session")?;
//!
//! // Fetch puzzle input
//! let input = client.get_input(2024, 1, &cookie)?;
//!
//! // Submit an answer
//! match client.submit_answer(2024, 1, 1, "42", &cookie)? {
//!     SubmissionOutcome::Accepted => println!("Correct!"),
//!     SubmissionOutcome::Rejected => println!("Incorrect"),
//!     SubmissionOutcome::RateLimited { wait_time } => {
//!         println!("Throttled: {:?}", wait_time);
//!     }
//!     SubmissionOutcome::Unrecognized { excerpt } => println!("Unknown: {}", excerpt),
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod parser;
mod session;

pub use client::{AocClient, AocClientBuilder, DEFAULT_BASE_URL, SubmissionOutcome};
pub use error::AocError;
pub use session::SessionCookie;
