// src/sample.rs
//! Qualification results bundled with the tool, handy for demos and offline runs.

use crate::model::MatchRecord;

/// match #, red win, blue win, red 1-3, blue 1-3
pub const QUALIFICATION: [[i64; 9]; 15] = [
    [1, 1, 0, 6875, 4678, 3683, 6992, 6070, 3739],
    [2, 0, 1, 8089, 7022, 2702, 4903, 4617, 6978],
    [3, 1, 0, 9659, 5024, 4476, 6162, 9562, 1360],
    [4, 0, 1, 3756, 9062, 4917, 2609, 5912, 772],
    [5, 0, 1, 3739, 6070, 6992, 2702, 7722, 8089],
    [6, 0, 0, 1360, 9562, 6162, 4917, 9062, 3756],
    [7, 1, 0, 6875, 4678, 3683, 4903, 4617, 6978],
    [8, 1, 0, 9659, 5024, 4476, 2609, 5912, 772],
    [9, 0, 1, 6978, 4617, 4903, 4917, 9062, 3756],
    [10, 1, 0, 772, 5912, 2609, 2702, 7022, 8089],
    [11, 1, 0, 6875, 4678, 3683, 4476, 5024, 9659],
    [12, 0, 1, 772, 5912, 2609, 4917, 9062, 3756],
    [13, 1, 0, 9659, 5024, 4476, 4917, 9062, 3756],
    [14, 0, 1, 6875, 4678, 3683, 4476, 5024, 9663],
    [15, 0, 1, 6875, 4678, 3683, 4476, 5024, 9659],
];

pub fn qualification_matches() -> Vec<MatchRecord> {
    QUALIFICATION
        .iter()
        .filter_map(|fields| MatchRecord::from_fields(fields).ok())
        .collect()
}
