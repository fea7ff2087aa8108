//! Output formatting for inputs, answers and submissions

use crate::cli::InputView;
use aoc_api::parse;
use chrono::{DateTime, Local, TimeDelta};
use std::io::Write as _;

/// What happened to an answer after it was computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Not sent; `--confirm` was not given
    DryRun,
    Correct,
    Incorrect,
}

impl SubmissionStatus {
    pub fn new(confirm: bool, accepted: bool) -> Self {
        match (confirm, accepted) {
            (false, _) => SubmissionStatus::DryRun,
            (true, true) => SubmissionStatus::Correct,
            (true, false) => SubmissionStatus::Incorrect,
        }
    }
}

/// Result of running one solution part
pub struct SolveReport {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: String,
    pub solve_duration: TimeDelta,
    pub submitted_at: DateTime<Local>,
    pub submission: SubmissionStatus,
}

/// Output formatter for the CLI
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Print puzzle input in the requested view
    pub fn print_input(&self, raw: &str, view: InputView) -> std::io::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(render_input(raw, view, self.quiet).as_bytes())?;
        stdout.flush()
    }

    /// Print the outcome of a manual submission
    pub fn print_submission(&self, year: u16, day: u8, level: u8, answer: &str, status: SubmissionStatus) {
        if self.quiet {
            println!("{}", format_status(status));
        } else {
            println!(
                "{}/{:02} Part {}: {} ({})",
                year,
                day,
                level,
                answer,
                format_status(status)
            );
        }
    }

    /// Format and print a single solve result
    pub fn print_result(&self, result: &SolveReport) {
        if self.quiet {
            println!("{}", result.answer);
            return;
        }

        println!(
            "{}/{:02} Part {}: {} (solve: {}, submitted {}: {})",
            result.year,
            result.day,
            result.part,
            result.answer,
            format_duration(result.solve_duration),
            result.submitted_at.format("%H:%M:%S"),
            format_status(result.submission)
        );
    }

    /// Print an answer whose submission failed, so it is not lost
    pub fn print_unsubmitted(&self, year: u16, day: u8, part: u8, answer: &str) {
        if self.quiet {
            println!("{}", answer);
        } else {
            println!("{}", format_unsubmitted(year, day, part, answer));
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolveReport]) {
        if self.quiet || results.len() < 2 {
            return;
        }

        let total_solve_time: TimeDelta = results.iter().map(|r| r.solve_duration).sum();
        let correct = results
            .iter()
            .filter(|r| r.submission == SubmissionStatus::Correct)
            .count();

        println!();
        println!("--- Summary ---");
        println!("Parts: {} run, {} accepted", results.len(), correct);
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

/// Render input text for display
fn render_input(raw: &str, view: InputView, quiet: bool) -> String {
    match view {
        InputView::Raw => raw.to_string(),
        InputView::Lines => parse::lines(raw)
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                if quiet {
                    format!("{}\n", line)
                } else {
                    format!("{:>5} | {}\n", idx + 1, line)
                }
            })
            .collect(),
        InputView::Chunks => parse::chunks(raw)
            .into_iter()
            .enumerate()
            .map(|(idx, chunk)| {
                let mut out = String::new();
                if idx > 0 {
                    out.push('\n');
                }
                if !quiet {
                    out.push_str(&format!("--- chunk {} ({} lines) ---\n", idx + 1, chunk.len()));
                }
                for line in chunk {
                    out.push_str(line);
                    out.push('\n');
                }
                out
            })
            .collect(),
    }
}

/// Line shown when an answer was computed but its submission failed
fn format_unsubmitted(year: u16, day: u8, part: u8, answer: &str) -> String {
    format!("{}/{:02} Part {}: {} (not submitted)", year, day, part, answer)
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    TimeDelta::from_std(d)
        .map(format_duration)
        .unwrap_or_else(|_| "N/A".to_string())
}

/// Format a submission status for display
fn format_status(status: SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::DryRun => "dry run, not submitted",
        SubmissionStatus::Correct => "✓ Correct",
        SubmissionStatus::Incorrect => "✗ Incorrect",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "1000\n2000\n\n4000\n";

    #[test]
    fn test_render_raw_is_verbatim() {
        assert_eq!(render_input(INPUT, InputView::Raw, false), INPUT);
    }

    #[test]
    fn test_render_lines() {
        assert_eq!(
            render_input(INPUT, InputView::Lines, false),
            "    1 | 1000\n    2 | 2000\n    3 | \n    4 | 4000\n"
        );
        assert_eq!(render_input(INPUT, InputView::Lines, true), "1000\n2000\n\n4000\n");
    }

    #[test]
    fn test_render_chunks() {
        assert_eq!(
            render_input(INPUT, InputView::Chunks, false),
            "--- chunk 1 (2 lines) ---\n1000\n2000\n\n--- chunk 2 (1 lines) ---\n4000\n"
        );
        assert_eq!(render_input("\n\n\n", InputView::Chunks, false), "");
    }

    #[test]
    fn test_render_chunks_quiet() {
        assert_eq!(
            render_input(INPUT, InputView::Chunks, true),
            "1000\n2000\n\n4000\n"
        );
    }

    #[test]
    fn test_unsubmitted_answer_is_shown() {
        assert_eq!(
            format_unsubmitted(2024, 1, 2, "31"),
            "2024/01 Part 2: 31 (not submitted)"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(250)), "250µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-250)), "-250µs");
    }

    #[test]
    fn test_submission_status() {
        assert_eq!(SubmissionStatus::new(false, false), SubmissionStatus::DryRun);
        assert_eq!(SubmissionStatus::new(false, true), SubmissionStatus::DryRun);
        assert_eq!(SubmissionStatus::new(true, true), SubmissionStatus::Correct);
        assert_eq!(SubmissionStatus::new(true, false), SubmissionStatus::Incorrect);
    }
}
