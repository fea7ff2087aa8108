//! Basic usage example for the AOC HTTP client
//!
//! This example demonstrates how to:
//! - Create a client with default settings
//! - Create a client with a custom timeout and user agent
//! - Load the session cookie from `./session`
//! - Fetch puzzle input
//! - Submit an answer
//!
//! Note: This example requires a valid session token in `./session`.

use aoc_http_client::{AocClient, SessionCookie, SubmissionOutcome};
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Default Client ===");
    let _default_client = AocClient::new()?;
    println!("✓ Client created with default base URL (https://adventofcode.com)");

    println!("\n=== Custom HTTP Configuration ===");
    let client = AocClient::builder()
        .user_agent("aoc-http-client basic_usage example")
        .client_builder(
            reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .use_rustls_tls(),
        )
        .build()?;
    println!("✓ Client created with custom timeout (30s)");

    let cookie = SessionCookie::load("./session")?;

    let year = 2024;
    let day = 1;
    println!("\nFetching input for year {} day {}...", year, day);
    match client.get_input(year, day, &cookie) {
        Ok(input) => {
            println!("✓ Input fetched successfully");
            println!("Input length: {} bytes", input.len());
        }
        Err(e) => {
            println!("✗ Failed to fetch input: {}", e);
        }
    }

    let level = 1;
    let answer = "12345";
    println!("\nSubmitting answer '{}' for level {}...", answer, level);
    match client.submit_answer(year, day, level, answer, &cookie)? {
        SubmissionOutcome::Accepted => println!("✓ Answer is correct!"),
        SubmissionOutcome::Rejected => println!("✗ Answer is incorrect"),
        SubmissionOutcome::RateLimited { wait_time } => match wait_time {
            Some(duration) => println!("⏱ Throttled. Wait time: {:?}", duration),
            None => println!("⏱ Throttled. Wait time unknown"),
        },
        SubmissionOutcome::Unrecognized { excerpt } => {
            println!("? Unrecognized response: {}", excerpt)
        }
    }

    Ok(())
}
