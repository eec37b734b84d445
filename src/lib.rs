// src/lib.rs

#[macro_use]
pub mod macros;

pub mod log;
pub mod config;
pub mod core;
pub mod specs;

pub mod error;
pub mod model;
pub mod sample;
pub mod winrate;

pub mod collect;
pub mod csv;
pub mod file;
pub mod progress;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{FetchError, ReportError};
pub use model::{EnrichedMatchRecord, MatchRecord, TeamNumber};
pub use winrate::{
    annotate_matches, compute_team_stats, generate_report, MatchCount, Report, ReportOptions, TeamStats,
    WinCredit,
};
