// src/gui/table_model.rs
//! What the central table shows: one table of the current `Report`, as strings.
//!
//! Rebuilt whenever the report or the active tab changes; the table widget only
//! reads it.

use crate::config::options::ReportTable;
use crate::model::ENRICHED_HEADERS;
use crate::winrate::{Report, TEAM_HEADERS};

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn from_report(report: &Report, table: ReportTable) -> Self {
        let (headers, rows) = match table {
            ReportTable::Matches => (&ENRICHED_HEADERS[..], report.match_rows()),
            ReportTable::Teams => (&TEAM_HEADERS[..], report.team_rows()),
        };
        Self { headers: headers.iter().map(|h| s!(*h)).collect(), rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Preferred starting width per column.
    pub fn column_width(&self, table: ReportTable, ci: usize) -> f32 {
        match (table, ci) {
            (ReportTable::Matches, 0) => 56.0,
            (ReportTable::Matches, 1 | 2) => 64.0,
            (ReportTable::Matches, _) => 72.0,
            (ReportTable::Teams, _) => 90.0,
        }
    }
}
