// src/model.rs
//! Typed match records.
//!
//! Input rows have a fixed positional layout:
//! `match #, red win, blue win, red 1, red 2, red 3, blue 1, blue 2, blue 3`.
//! Everything past the parsing boundary works with named fields only.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReportError;

pub type TeamNumber = u32;

pub const MATCH_HEADERS: [&str; 9] = [
    "Match", "Red win", "Blue win", "Red 1", "Red 2", "Red 3", "Blue 1", "Blue 2", "Blue 3",
];

pub const ENRICHED_HEADERS: [&str; 15] = [
    "Match", "Red win", "Blue win", "Red 1", "Red 2", "Red 3", "Blue 1", "Blue 2", "Blue 3",
    "Red 1 %", "Red 2 %", "Red 3 %", "Blue 1 %", "Blue 2 %", "Blue 3 %",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alliance {
    Red,
    Blue,
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::Red => write!(f, "Red"),
            Alliance::Blue => write!(f, "Blue"),
        }
    }
}

/// What the two win flags say about a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    RedWin,
    BlueWin,
    /// Both flags 0: tie or not scored yet.
    Undecided,
    /// Both flags 1.
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub match_number: u32,
    pub red_win: bool,
    pub blue_win: bool,
    pub red: [TeamNumber; 3],
    pub blue: [TeamNumber; 3],
}

impl MatchRecord {
    pub const FIELD_COUNT: usize = 9;

    /// Build from the positional integer layout.
    pub fn from_fields(fields: &[i64]) -> Result<Self, ReportError> {
        if fields.len() != Self::FIELD_COUNT {
            return Err(ReportError::malformed(
                0,
                format!("expected {} fields, found {}", Self::FIELD_COUNT, fields.len()),
            ));
        }

        let match_number = u32::try_from(fields[0])
            .map_err(|_| ReportError::malformed(0, format!("bad match number {}", fields[0])))?;
        let red_win = flag(fields[1], "red win")?;
        let blue_win = flag(fields[2], "blue win")?;

        let mut teams = [0 as TeamNumber; 6];
        for (slot, &raw) in teams.iter_mut().zip(&fields[3..]) {
            *slot = TeamNumber::try_from(raw)
                .map_err(|_| ReportError::malformed(0, format!("bad team number {raw}")))?;
        }

        Ok(Self {
            match_number,
            red_win,
            blue_win,
            red: [teams[0], teams[1], teams[2]],
            blue: [teams[3], teams[4], teams[5]],
        })
    }

    /// Build from textual cells (CSV/TSV input). Cells are trimmed.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self, ReportError> {
        let mut fields = Vec::with_capacity(row.len());
        for cell in row {
            let cell = cell.as_ref().trim();
            let v: i64 = cell
                .parse()
                .map_err(|_| ReportError::malformed(0, format!("not an integer: {cell:?}")))?;
            fields.push(v);
        }
        Self::from_fields(&fields)
    }

    pub fn roster(&self, alliance: Alliance) -> &[TeamNumber; 3] {
        match alliance {
            Alliance::Red => &self.red,
            Alliance::Blue => &self.blue,
        }
    }

    /// All six teams in report order: red1, red2, red3, blue1, blue2, blue3.
    pub fn teams(&self) -> impl Iterator<Item = (Alliance, TeamNumber)> + '_ {
        self.red
            .iter()
            .map(|&t| (Alliance::Red, t))
            .chain(self.blue.iter().map(|&t| (Alliance::Blue, t)))
    }

    pub fn alliance_of(&self, team: TeamNumber) -> Option<Alliance> {
        self.teams().find(|&(_, t)| t == team).map(|(a, _)| a)
    }

    pub fn outcome(&self) -> Outcome {
        match (self.red_win, self.blue_win) {
            (true, false) => Outcome::RedWin,
            (false, true) => Outcome::BlueWin,
            (false, false) => Outcome::Undecided,
            (true, true) => Outcome::Tie,
        }
    }

    pub fn to_row(&self) -> Vec<String> {
        let [r1, r2, r3] = self.red;
        let [b1, b2, b3] = self.blue;
        row![
            self.match_number,
            u8::from(self.red_win),
            u8::from(self.blue_win),
            r1, r2, r3, b1, b2, b3,
        ]
    }
}

fn flag(v: i64, what: &str) -> Result<bool, ReportError> {
    match v {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(ReportError::malformed(0, format!("{what} must be 0 or 1, found {other}"))),
    }
}

/// A match followed by the win rate of each participating team, in
/// red1, red2, red3, blue1, blue2, blue3 order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMatchRecord {
    #[serde(flatten)]
    pub record: MatchRecord,
    pub win_rates: [f64; 6],
}

impl EnrichedMatchRecord {
    pub fn to_row(&self) -> Vec<String> {
        let mut out = self.record.to_row();
        out.extend(self.win_rates.iter().map(|r| format!("{r:.2}")));
        out
    }

    /// One comma-separated line, no trailing newline.
    pub fn to_line(&self) -> String {
        self.to_row().join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MatchRecord {
        MatchRecord::from_fields(&[1, 1, 0, 6875, 4678, 3683, 6992, 6070, 3739]).unwrap()
    }

    #[test]
    fn fields_land_in_named_slots() {
        let m = sample();
        assert_eq!(m.match_number, 1);
        assert!(m.red_win && !m.blue_win);
        assert_eq!(m.red, [6875, 4678, 3683]);
        assert_eq!(m.blue, [6992, 6070, 3739]);
        assert_eq!(m.alliance_of(6070), Some(Alliance::Blue));
        assert_eq!(m.alliance_of(1), None);
    }

    #[test]
    fn short_record_is_malformed() {
        let err = MatchRecord::from_fields(&[1, 1, 0, 6875, 4678]).unwrap_err();
        assert!(matches!(err, ReportError::MalformedRecord { .. }));
    }

    #[test]
    fn win_flags_must_be_binary() {
        let err = MatchRecord::from_fields(&[1, 2, 0, 1, 2, 3, 4, 5, 6]).unwrap_err();
        assert!(err.to_string().contains("red win"));
    }

    #[test]
    fn negative_team_is_malformed() {
        assert!(MatchRecord::from_fields(&[1, 1, 0, 1, 2, 3, 4, 5, -6]).is_err());
    }

    #[test]
    fn text_row_trims_cells() {
        let m = MatchRecord::from_row(&[" 4", "0", "1 ", "3756", "9062", "4917", "2609", "5912", "772"]).unwrap();
        assert_eq!(m.outcome(), Outcome::BlueWin);
        assert_eq!(m.to_row().join(","), "4,0,1,3756,9062,4917,2609,5912,772");
    }

    #[test]
    fn non_numeric_cell_is_malformed() {
        assert!(MatchRecord::from_row(&["x", "0", "1", "1", "2", "3", "4", "5", "6"]).is_err());
    }

    #[test]
    fn teams_iterate_in_report_order() {
        let order: Vec<_> = sample().teams().map(|(_, t)| t).collect();
        assert_eq!(order, vec![6875, 4678, 3683, 6992, 6070, 3739]);
    }

    #[test]
    fn enriched_line_has_two_decimals() {
        let e = EnrichedMatchRecord { record: sample(), win_rates: [100.0, 60.0, 33.333, 0.0, 0.0, 0.0] };
        assert_eq!(e.to_line(), "1,1,0,6875,4678,3683,6992,6070,3739,100.00,60.00,33.33,0.00,0.00,0.00");
    }
}
