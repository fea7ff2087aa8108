use anyhow::{Context, anyhow};
use aoc_api::parse::lines_mapped;
use itertools::Itertools;
use std::str::FromStr;

/// Parse each line as two whitespace separated integers, split into columns
fn parse(input: &str) -> anyhow::Result<(Vec<i64>, Vec<i64>)> {
    let mut line_idx = 0;
    let pairs = lines_mapped(input, |line| -> anyhow::Result<(i64, i64)> {
        line_idx += 1;
        let (left, right) = line
            .split_whitespace()
            .collect_tuple()
            .ok_or_else(|| anyhow!("(line {}) expected two columns", line_idx))?;

        Ok((
            <i64 as FromStr>::from_str(left).with_context(|| format!("(line {}) left column", line_idx))?,
            <i64 as FromStr>::from_str(right).with_context(|| format!("(line {}) right column", line_idx))?,
        ))
    })?;

    Ok(pairs.into_iter().unzip())
}

/// Total distance between the sorted left and right columns
pub fn part1(input: &str) -> anyhow::Result<String> {
    let (lefts, rights) = parse(input)?;

    let total: u64 = lefts
        .into_iter()
        .sorted_unstable()
        .zip(rights.into_iter().sorted_unstable())
        .map(|(left, right)| left.abs_diff(right))
        .sum();

    Ok(total.to_string())
}

/// Similarity score: each left value times its occurrences in the right column
pub fn part2(input: &str) -> anyhow::Result<String> {
    let (lefts, rights) = parse(input)?;
    let counts = rights.into_iter().counts();

    let total: i64 = lefts
        .iter()
        .map(|left| left * counts.get(left).copied().unwrap_or(0) as i64)
        .sum();

    Ok(total.to_string())
}
