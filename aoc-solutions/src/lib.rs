//! Advent of Code puzzle solutions
//!
//! Each solution is a plain function from raw puzzle input to an answer
//! string, listed in a per-module table and looked up by year, day and part.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

/// Solver function: raw input in, answer out
pub type SolveFn = fn(&str) -> anyhow::Result<String>;

/// A registered solution for one puzzle part
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub solve: SolveFn,
}

impl Solution {
    pub const fn new(year: u16, day: u8, part: u8, solve: SolveFn) -> Self {
        Self {
            year,
            day,
            part,
            solve,
        }
    }
}

#[cfg(feature = "my-solutions")]
const SOLUTIONS: &[Solution] = my_solutions::SOLUTIONS;

#[cfg(not(feature = "my-solutions"))]
const SOLUTIONS: &[Solution] = &[];

/// All registered solutions
pub fn solutions() -> &'static [Solution] {
    SOLUTIONS
}

/// Find the solution for a puzzle part
pub fn lookup(year: u16, day: u8, part: u8) -> Option<&'static Solution> {
    solutions()
        .iter()
        .find(|s| s.year == year && s.day == day && s.part == part)
}

/// Parts with a registered solution for a puzzle, in ascending order
pub fn parts(year: u16, day: u8) -> Vec<u8> {
    let mut parts: Vec<u8> = solutions()
        .iter()
        .filter(|s| s.year == year && s.day == day)
        .map(|s| s.part)
        .collect();
    parts.sort_unstable();
    parts.dedup();
    parts
}

#[cfg(all(test, feature = "my-solutions"))]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_registered() {
        let solution = lookup(2024, 1, 1).unwrap();
        assert_eq!((solution.year, solution.day, solution.part), (2024, 1, 1));
        assert_eq!((solution.solve)("1   2\n").unwrap(), "1");
    }

    #[test]
    fn test_lookup_missing() {
        assert!(lookup(2024, 1, 3).is_none());
        assert!(lookup(2015, 1, 1).is_none());
    }

    #[test]
    fn test_parts() {
        assert_eq!(parts(2024, 1), vec![1, 2]);
        assert!(parts(2024, 2).is_empty());
    }

    #[test]
    fn test_no_duplicate_registrations() {
        let all = solutions();
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(
                    (a.year, a.day, a.part) != (b.year, b.day, b.part),
                    "duplicate solution for {}/{} part {}",
                    a.year,
                    a.day,
                    a.part
                );
            }
        }
    }
}
