// src/winrate.rs
//! Win counting and win-rate annotation.
//!
//! One pass over the matches builds a per-team tally; a second pass appends the
//! six participants' win rates to every match, in input order. Both passes are
//! pure: nothing outlives the call.

use std::collections::{BTreeMap, HashSet};
use std::num::NonZeroU32;

use serde::Serialize;

use crate::error::ReportError;
use crate::model::{Alliance, EnrichedMatchRecord, MatchRecord, Outcome, TeamNumber};

/// Which alliance gets the win for a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WinCredit {
    /// Red on red win, blue otherwise. Undecided matches credit blue; a match with
    /// both flags set credits red.
    #[default]
    NotRedWin,
    /// Red on red win, blue on blue win, nobody on undecided or tied matches.
    Explicit,
}

impl WinCredit {
    pub fn winner(self, m: &MatchRecord) -> Option<Alliance> {
        match self {
            WinCredit::NotRedWin => Some(if m.red_win { Alliance::Red } else { Alliance::Blue }),
            WinCredit::Explicit => match m.outcome() {
                Outcome::RedWin => Some(Alliance::Red),
                Outcome::BlueWin => Some(Alliance::Blue),
                Outcome::Undecided | Outcome::Tie => None,
            },
        }
    }
}

/// Divisor used for win rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchCount {
    /// Matches the team actually played.
    #[default]
    Participation,
    /// Same divisor for every team. Rates are capped at 100.
    Fixed(NonZeroU32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportOptions {
    pub credit: WinCredit,
    pub divisor: MatchCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamStats {
    pub wins: u32,
    pub matches_played: u32,
    /// Percent, two decimals.
    pub win_rate: f64,
}

pub type TeamStatsMap = BTreeMap<TeamNumber, TeamStats>;

/// Two decimals, exact halves to even (3.125 → 3.12).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round_ties_even() / 100.0
}

fn rate(wins: u32, played: u32, divisor: MatchCount) -> f64 {
    let denom = match divisor {
        MatchCount::Participation => played,
        MatchCount::Fixed(n) => n.get(),
    };
    if denom == 0 {
        return 0.0;
    }
    round2((f64::from(wins) / f64::from(denom) * 100.0).min(100.0))
}

/// Count wins and appearances for every team in `matches`.
pub fn compute_team_stats(matches: &[MatchRecord], opts: &ReportOptions) -> TeamStatsMap {
    let mut tally: BTreeMap<TeamNumber, (u32, u32)> = BTreeMap::new();

    for m in matches {
        let winners = opts.credit.winner(m).map(|a| m.roster(a));
        let mut seen: HashSet<TeamNumber> = HashSet::with_capacity(6);

        for (_, team) in m.teams() {
            if !seen.insert(team) {
                continue;
            }
            let entry = tally.entry(team).or_insert((0, 0));
            entry.1 += 1;
            if winners.is_some_and(|w| w.contains(&team)) {
                entry.0 += 1;
            }
        }
    }

    tally
        .into_iter()
        .map(|(team, (wins, played))| {
            let stats = TeamStats { wins, matches_played: played, win_rate: rate(wins, played, opts.divisor) };
            (team, stats)
        })
        .collect()
}

/// Append each participant's win rate to its match. Order is preserved.
pub fn annotate_matches(
    matches: &[MatchRecord],
    stats: &TeamStatsMap,
) -> Result<Vec<EnrichedMatchRecord>, ReportError> {
    matches
        .iter()
        .map(|m| {
            let mut win_rates = [0.0; 6];
            for (slot, (_, team)) in win_rates.iter_mut().zip(m.teams()) {
                *slot = stats
                    .get(&team)
                    .ok_or(ReportError::UnknownTeam { team, match_number: m.match_number })?
                    .win_rate;
            }
            Ok(EnrichedMatchRecord { record: m.clone(), win_rates })
        })
        .collect()
}

/// Stats then annotation over the same match set.
pub fn generate_report(
    matches: &[MatchRecord],
    opts: &ReportOptions,
) -> Result<Vec<EnrichedMatchRecord>, ReportError> {
    let stats = compute_team_stats(matches, opts);
    annotate_matches(matches, &stats)
}

/// Win rate of one team across `matches`; 0.0 if it never played.
pub fn team_win_rate(matches: &[MatchRecord], team: TeamNumber, opts: &ReportOptions) -> f64 {
    let mut wins = 0;
    let mut played = 0;
    for m in matches.iter().filter(|m| m.alliance_of(team).is_some()) {
        played += 1;
        if opts.credit.winner(m).is_some_and(|w| m.roster(w).contains(&team)) {
            wins += 1;
        }
    }
    rate(wins, played, opts.divisor)
}

/// Statistics plus enriched matches, as shown and exported by the frontends.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub options: ReportOptions,
    pub teams: TeamStatsMap,
    pub matches: Vec<EnrichedMatchRecord>,
}

impl Report {
    pub fn build(matches: &[MatchRecord], options: ReportOptions) -> Result<Self, ReportError> {
        let teams = compute_team_stats(matches, &options);
        let matches = annotate_matches(matches, &teams)?;
        Ok(Self { options, teams, matches })
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// `Team, Wins, Played, Win %` rows, by team number.
    pub fn team_rows(&self) -> Vec<Vec<String>> {
        self.teams
            .iter()
            .map(|(team, s)| row![team, s.wins, s.matches_played, format!("{:.2}", s.win_rate)])
            .collect()
    }

    pub fn match_rows(&self) -> Vec<Vec<String>> {
        self.matches.iter().map(EnrichedMatchRecord::to_row).collect()
    }
}

pub const TEAM_HEADERS: [&str; 4] = ["Team", "Wins", "Played", "Win %"];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample;

    fn m(fields: [i64; 9]) -> MatchRecord {
        MatchRecord::from_fields(&fields).unwrap()
    }

    fn explicit() -> ReportOptions {
        ReportOptions { credit: WinCredit::Explicit, ..ReportOptions::default() }
    }

    #[test]
    fn every_rostered_team_gets_exactly_one_entry() {
        let matches = sample::qualification_matches();
        let stats = compute_team_stats(&matches, &ReportOptions::default());

        let mut all: Vec<TeamNumber> = matches.iter().flat_map(|m| m.teams().map(|(_, t)| t)).collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(stats.keys().copied().collect::<Vec<_>>(), all);
        assert_eq!(stats.len(), 26);
    }

    #[test]
    fn rates_stay_in_range_and_match_formula() {
        let matches = sample::qualification_matches();
        for opts in [ReportOptions::default(), explicit()] {
            for s in compute_team_stats(&matches, &opts).values() {
                assert!((0.0..=100.0).contains(&s.win_rate));
                let expected = round2(f64::from(s.wins) / f64::from(s.matches_played) * 100.0);
                assert_eq!(s.win_rate, expected);
            }
        }
    }

    #[test]
    fn decided_match_credits_exactly_one_alliance() {
        let one = [m([1, 1, 0, 1, 2, 3, 4, 5, 6])];
        let stats = compute_team_stats(&one, &ReportOptions::default());
        let total: u32 = stats.values().map(|s| s.wins).sum();
        assert_eq!(total, 3);
        assert!([1, 2, 3].iter().all(|t| stats[t].wins == 1));
        assert!([4, 5, 6].iter().all(|t| stats[t].wins == 0));
    }

    #[test]
    fn red_sweep_scenario() {
        let matches = [
            m([1, 1, 0, 6875, 4678, 3683, 6992, 6070, 3739]),
            m([7, 1, 0, 6875, 4678, 3683, 4903, 4617, 6978]),
            m([11, 1, 0, 6875, 4678, 3683, 4476, 5024, 9659]),
        ];
        let s = compute_team_stats(&matches, &ReportOptions::default())[&6875];
        assert_eq!((s.wins, s.matches_played, s.win_rate), (3, 3, 100.0));
    }

    #[test]
    fn unscored_match_credits_blue_by_default() {
        let matches = [
            m([4, 0, 1, 2609, 5912, 772, 4917, 9062, 3756]),
            m([6, 0, 0, 1360, 9562, 6162, 4917, 9062, 3756]),
            m([9, 0, 1, 6978, 4617, 4903, 4917, 9062, 3756]),
            m([12, 0, 1, 772, 5912, 2609, 4917, 9062, 3756]),
            m([13, 0, 1, 9659, 5024, 4476, 4917, 9062, 3756]),
        ];
        let s = compute_team_stats(&matches, &ReportOptions::default())[&3756];
        assert_eq!((s.wins, s.matches_played, s.win_rate), (5, 5, 100.0));

        let s = compute_team_stats(&matches, &explicit())[&3756];
        assert_eq!((s.wins, s.matches_played, s.win_rate), (4, 5, 80.0));
    }

    #[test]
    fn tie_credits_red_by_default() {
        let tie = [m([1, 1, 1, 1, 2, 3, 4, 5, 6])];
        let stats = compute_team_stats(&tie, &ReportOptions::default());
        assert!([1, 2, 3].iter().all(|t| stats[t].wins == 1));
        assert!([4, 5, 6].iter().all(|t| stats[t].wins == 0));
    }

    #[test]
    fn half_hundredths_round_to_even() {
        assert_eq!(round2(3.125), 3.12);
        assert_eq!(round2(0.375), 0.38);
        let opts = ReportOptions { divisor: MatchCount::Fixed(NonZeroU32::new(32).unwrap()), ..Default::default() };
        let stats = compute_team_stats(&[m([1, 1, 0, 1, 2, 3, 4, 5, 6])], &opts);
        assert_eq!(stats[&1].win_rate, 3.12);
    }

    #[test]
    fn tie_credits_nobody_when_explicit() {
        let tie = [m([1, 1, 1, 1, 2, 3, 4, 5, 6])];
        let stats = compute_team_stats(&tie, &explicit());
        assert!(stats.values().all(|s| s.wins == 0 && s.matches_played == 1));
    }

    #[test]
    fn single_loss_is_zero() {
        let stats = compute_team_stats(&[m([1, 1, 0, 1, 2, 3, 4, 5, 6])], &ReportOptions::default());
        assert_eq!(stats[&4].win_rate, 0.0);
    }

    #[test]
    fn sample_matches_known_rates() {
        let matches = sample::qualification_matches();
        let stats = compute_team_stats(&matches, &ReportOptions::default());
        assert_eq!(stats[&4476].win_rate, 83.33);
        assert_eq!(stats[&9659].win_rate, 80.0);
        assert_eq!(stats[&2702].win_rate, 33.33);
        assert_eq!(stats[&6875].matches_played, 5);
        assert_eq!(stats[&3756].wins, 3);

        let stats = compute_team_stats(&matches, &explicit());
        assert_eq!(stats[&3756].wins, 2);
        assert_eq!(stats[&9062].win_rate, 40.0);
    }

    #[test]
    fn fixed_divisor_reproduces_twelve_match_rates() {
        let opts = ReportOptions { divisor: MatchCount::Fixed(NonZeroU32::new(12).unwrap()), ..Default::default() };
        let stats = compute_team_stats(&sample::qualification_matches(), &opts);
        assert_eq!(stats[&4476].win_rate, 41.67);
        assert_eq!(stats[&7722].win_rate, 8.33);
    }

    #[test]
    fn fixed_divisor_caps_at_hundred() {
        let opts = ReportOptions { divisor: MatchCount::Fixed(NonZeroU32::new(1).unwrap()), ..Default::default() };
        let matches = [m([1, 1, 0, 1, 2, 3, 4, 5, 6]), m([2, 1, 0, 1, 2, 3, 4, 5, 6])];
        assert_eq!(compute_team_stats(&matches, &opts)[&1].win_rate, 100.0);
    }

    #[test]
    fn repeated_team_in_one_match_counts_once() {
        let stats = compute_team_stats(&[m([1, 1, 0, 7, 7, 3, 4, 5, 6])], &ReportOptions::default());
        assert_eq!((stats[&7].wins, stats[&7].matches_played), (1, 1));
    }

    #[test]
    fn report_preserves_order_and_is_idempotent() {
        let matches = sample::qualification_matches();
        let a = generate_report(&matches, &ReportOptions::default()).unwrap();
        let b = generate_report(&matches, &ReportOptions::default()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), matches.len());
        for (e, m) in a.iter().zip(&matches) {
            assert_eq!(&e.record, m);
        }
        assert_eq!(a[0].to_line(), "1,1,0,6875,4678,3683,6992,6070,3739,60.00,60.00,60.00,0.00,0.00,0.00");
    }

    #[test]
    fn annotate_with_foreign_stats_is_unknown_team() {
        let stats = compute_team_stats(&[m([1, 1, 0, 1, 2, 3, 4, 5, 6])], &ReportOptions::default());
        let err = annotate_matches(&[m([2, 1, 0, 1, 2, 3, 4, 5, 99])], &stats).unwrap_err();
        assert_eq!(err, ReportError::UnknownTeam { team: 99, match_number: 2 });
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let r = Report::build(&[], ReportOptions::default()).unwrap();
        assert!(r.is_empty() && r.teams.is_empty());
    }

    #[test]
    fn single_team_lookup_agrees_with_table() {
        let matches = sample::qualification_matches();
        let opts = ReportOptions::default();
        let stats = compute_team_stats(&matches, &opts);
        assert_eq!(team_win_rate(&matches, 4476, &opts), stats[&4476].win_rate);
        assert_eq!(team_win_rate(&matches, 1, &opts), 0.0);
    }

    #[test]
    fn team_rows_are_sorted_by_number() {
        let r = Report::build(&sample::qualification_matches(), ReportOptions::default()).unwrap();
        let rows = r.team_rows();
        assert_eq!(rows[0], vec!["772", "2", "4", "50.00"]);
        assert_eq!(rows.len(), 26);
    }
}
