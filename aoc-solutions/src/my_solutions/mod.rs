//! Personal solutions, grouped by year

pub mod year_2024;

use crate::Solution;

/// Every solution in this module
pub(crate) const SOLUTIONS: &[Solution] = &[
    Solution::new(2024, 1, 1, year_2024::day_1::part1),
    Solution::new(2024, 1, 2, year_2024::day_1::part2),
];
