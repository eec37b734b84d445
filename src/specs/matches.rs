// src/specs/matches.rs
//! Match results from the FRC Events API.
//!
//! `GET /{season}/matches/{event}?tournamentLevel=...` answers with
//! `{"Matches": [{"matchNumber", "scoreRedFinal", "scoreBlueFinal", "teams": [...]}]}`.
//! Each finished match becomes one `MatchRecord`:
//! - matches with a null final score on either side are skipped,
//! - `red_win = red > blue`, `blue_win = blue > red` (a draw sets neither),
//! - teams are grouped by station (`Red1..3`, `Blue1..3`) and kept in station order.

use log::{debug, warn};
use serde::Deserialize;

use crate::config::options::FetchOptions;
use crate::core::{net, Credentials};
use crate::error::FetchError;
use crate::model::{MatchRecord, TeamNumber};

#[derive(Debug, Deserialize)]
struct MatchesResponse {
    #[serde(rename = "Matches", default)]
    matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMatch {
    match_number: u32,
    score_red_final: Option<i64>,
    score_blue_final: Option<i64>,
    #[serde(default)]
    teams: Vec<ApiTeam>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiTeam {
    team_number: Option<TeamNumber>,
    #[serde(default)]
    station: String,
}

/// Normalised records plus what had to be dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatchesBundle {
    pub records: Vec<MatchRecord>,
    /// Matches without both final scores.
    pub unscored: usize,
    /// Scored matches without three teams per alliance.
    pub incomplete: usize,
}

/// Parse a response body. Pure; no I/O.
pub fn parse_matches(body: &str) -> Result<MatchesBundle, serde_json::Error> {
    let response: MatchesResponse = serde_json::from_str(body)?;
    let mut bundle = MatchesBundle::default();

    for m in response.matches {
        let (Some(red_score), Some(blue_score)) = (m.score_red_final, m.score_blue_final) else {
            bundle.unscored += 1;
            continue;
        };

        match (roster(&m.teams, "Red"), roster(&m.teams, "Blue")) {
            (Some(red), Some(blue)) => bundle.records.push(MatchRecord {
                match_number: m.match_number,
                red_win: red_score > blue_score,
                blue_win: blue_score > red_score,
                red,
                blue,
            }),
            _ => {
                warn!("Match {}: expected 3 teams per alliance, skipping", m.match_number);
                bundle.incomplete += 1;
            }
        }
    }

    debug!(
        "Parsed matches: kept={} unscored={} incomplete={}",
        bundle.records.len(),
        bundle.unscored,
        bundle.incomplete
    );
    Ok(bundle)
}

fn roster(teams: &[ApiTeam], side: &str) -> Option<[TeamNumber; 3]> {
    let mut seats: Vec<(&str, TeamNumber)> = teams
        .iter()
        .filter(|t| t.station.starts_with(side))
        .filter_map(|t| t.team_number.map(|n| (t.station.as_str(), n)))
        .collect();
    seats.sort_by(|a, b| a.0.cmp(b.0));

    match seats.as_slice() {
        [(_, a), (_, b), (_, c)] => Some([*a, *b, *c]),
        _ => None,
    }
}

/// Fetch and normalise one event's results.
pub fn fetch(opts: &FetchOptions, creds: &Credentials) -> Result<MatchesBundle, FetchError> {
    let url = opts.url();
    debug!("GET {url}");
    let body = net::http_get(&url, creds)?;
    Ok(parse_matches(&body)?)
}
