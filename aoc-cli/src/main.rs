//! AOC CLI - fetch puzzle inputs, run solutions and submit answers

mod cli;
mod config;
mod error;
mod output;

use aoc_api::AocApi;
use chrono::{Local, TimeDelta};
use clap::Parser;
use cli::{Args, Command, InputArgs, SolveArgs, SubmitArgs};
use error::CliError;
use output::{OutputFormatter, SolveReport, SubmissionStatus};
use std::time::Instant;

fn main() {
    let args = Args::parse();

    // RUST_LOG wins over --quiet/--verbose
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(config::default_log_level(args.quiet, args.verbose))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(?args, "CLI arguments parsed");

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let api = AocApi::new(config::api_config(&args))?;
    let formatter = OutputFormatter::new(args.quiet);

    match args.command {
        Command::Input(input) => run_input(&api, &formatter, input),
        Command::Submit(submit) => run_submit(&api, &formatter, submit),
        Command::Solve(solve) => run_solve(&api, &formatter, solve),
    }
}

fn run_input(api: &AocApi, formatter: &OutputFormatter, args: InputArgs) -> Result<(), CliError> {
    let raw = api.get_raw(args.puzzle.day, args.puzzle.year)?;
    formatter.print_input(&raw, args.view)?;
    Ok(())
}

fn run_submit(api: &AocApi, formatter: &OutputFormatter, args: SubmitArgs) -> Result<(), CliError> {
    let SubmitArgs {
        puzzle,
        level,
        answer,
        confirm,
    } = args;

    let accepted = api.submit(puzzle.day, level, &answer, confirm, puzzle.year)?;
    formatter.print_submission(
        puzzle.year,
        puzzle.day,
        level,
        &answer,
        SubmissionStatus::new(confirm, accepted),
    );
    Ok(())
}

fn run_solve(api: &AocApi, formatter: &OutputFormatter, args: SolveArgs) -> Result<(), CliError> {
    let (year, day) = (args.puzzle.year, args.puzzle.day);

    let parts = match args.part {
        Some(part) => vec![part],
        None => aoc_solutions::parts(year, day),
    };
    let solutions = parts
        .into_iter()
        .map(|part| {
            aoc_solutions::lookup(year, day, part).ok_or(CliError::NoSolution {
                year,
                day,
                part: args.part,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if solutions.is_empty() {
        return Err(CliError::NoSolution {
            year,
            day,
            part: None,
        });
    }

    let input = api.get_raw(day, year)?;

    let mut results = Vec::with_capacity(solutions.len());
    for solution in solutions {
        let start = Instant::now();
        let answer = (solution.solve)(&input).map_err(|e| CliError::Solve {
            year,
            day,
            part: solution.part,
            message: format!("{:#}", e),
        })?;
        let solve_duration = TimeDelta::from_std(start.elapsed()).unwrap_or(TimeDelta::MAX);

        let accepted = match api.submit(day, solution.part, &answer, args.confirm, year) {
            Ok(accepted) => accepted,
            Err(e) => {
                formatter.print_unsubmitted(year, day, solution.part, &answer);
                return Err(e.into());
            }
        };

        let report = SolveReport {
            year,
            day,
            part: solution.part,
            answer,
            solve_duration,
            submitted_at: Local::now(),
            submission: SubmissionStatus::new(args.confirm, accepted),
        };
        formatter.print_result(&report);
        results.push(report);
    }

    formatter.print_summary(&results);
    Ok(())
}
