// src/error.rs
use thiserror::Error;

use crate::model::TeamNumber;

/// Failures of the report computation. The whole batch aborts on the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// A record does not have the 9-field match layout.
    /// `row` is 1-based when known, 0 otherwise.
    #[error("malformed match record (row {row}): {reason}")]
    MalformedRecord { row: usize, reason: String },

    /// Annotation hit a team the statistics pass never saw.
    #[error("team {team} in match {match_number} has no computed statistics")]
    UnknownTeam { team: TeamNumber, match_number: u32 },
}

impl ReportError {
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        ReportError::MalformedRecord { row, reason: reason.into() }
    }

    /// Attach a row number to a MalformedRecord raised without one.
    pub fn at_row(self, row: usize) -> Self {
        match self {
            ReportError::MalformedRecord { row: 0, reason } => ReportError::MalformedRecord { row, reason },
            other => other,
        }
    }
}

/// Failures of the match-results API collaborator.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("missing credential: set {0} in the environment or .env")]
    MissingCredentials(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode matches response: {0}")]
    Decode(#[from] serde_json::Error),
}
