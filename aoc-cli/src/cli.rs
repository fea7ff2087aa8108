//! CLI argument parsing using clap

use aoc_api::{DEFAULT_CACHE_DIR, DEFAULT_SESSION_PATH, DEFAULT_YEAR};
use aoc_http_client::DEFAULT_BASE_URL;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Advent of Code input fetcher and answer submitter
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Fetch Advent of Code inputs, run solutions and submit answers", version)]
pub struct Args {
    /// File holding the session token
    #[arg(long, global = true, default_value = DEFAULT_SESSION_PATH)]
    pub session_file: PathBuf,

    /// Directory for cached puzzle inputs
    #[arg(long, global = true, default_value = DEFAULT_CACHE_DIR)]
    pub cache_dir: PathBuf,

    /// Server base URL
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, global = true)]
    pub user_agent: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode - only output answers and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print puzzle input, fetching and caching it if needed
    Input(InputArgs),
    /// Submit an answer
    Submit(SubmitArgs),
    /// Run registered solutions on the puzzle input and submit the answers
    Solve(SolveArgs),
}

/// Puzzle selection shared by all subcommands
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct PuzzleArgs {
    /// Day of the puzzle
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: u8,

    /// Year of the puzzle
    #[arg(short, long, default_value_t = DEFAULT_YEAR)]
    pub year: u16,
}

/// How to show the input
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum InputView {
    /// The raw text, verbatim
    #[default]
    Raw,
    /// One line per row, trailing empty line dropped
    Lines,
    /// Blank-line separated chunks
    Chunks,
}

#[derive(clap::Args, Debug)]
pub struct InputArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// Output view: raw, lines, or chunks
    #[arg(long, value_enum, default_value = "raw")]
    pub view: InputView,
}

#[derive(clap::Args, Debug)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// Puzzle level (1 or 2), sent as-is
    #[arg(short, long)]
    pub level: u8,

    /// Answer to submit
    #[arg(short, long)]
    pub answer: String,

    /// Actually submit; without this flag only a dry-run notice is logged
    #[arg(long)]
    pub confirm: bool,
}

#[derive(clap::Args, Debug)]
pub struct SolveArgs {
    #[command(flatten)]
    pub puzzle: PuzzleArgs,

    /// Part to run (runs all registered parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Submit the answers; without this flag submission is a dry run
    #[arg(long)]
    pub confirm: bool,
}
