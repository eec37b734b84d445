// tests/report_e2e.rs
use std::fs;
use std::path::PathBuf;

use frc_scout::config::options::{ExportFormat, ExportOptions, ReportTable};
use frc_scout::file::{self, export_report, read_matches_file};
use frc_scout::{sample, MatchCount, Report, ReportOptions, WinCredit};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("frc_scout_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

const MATCHES_CSV: &str = "\
Match,Red win,Blue win,Red 1,Red 2,Red 3,Blue 1,Blue 2,Blue 3
1,1,0,6875,4678,3683,6992,6070,3739
2,0,1,8089,7022,2702,4903,4617,6978
3,0,0,6875,8089,4903,3683,7022,4617
";

#[test]
fn csv_file_to_enriched_report_file() {
    let dir = tmp_dir("roundtrip");
    let input = dir.join("matches.csv");
    fs::write(&input, MATCHES_CSV).unwrap();

    let matches = read_matches_file(&input).unwrap();
    assert_eq!(matches.len(), 3);

    let report = Report::build(&matches, ReportOptions::default()).unwrap();

    let mut export = ExportOptions::default();
    export.include_headers = true;
    export.set_path(dir.join("out").join("report").to_str().unwrap());
    let written = export_report(&export, &report).unwrap();
    assert!(written.ends_with("report.csv"));

    let text = fs::read_to_string(&written).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Match,Red win,Blue win"));
    // Match 3 is undecided, so its blue alliance is credited.
    assert_eq!(lines[1], "1,1,0,6875,4678,3683,6992,6070,3739,50.00,100.00,100.00,0.00,0.00,0.00");
    assert_eq!(lines[3], "3,0,0,6875,8089,4903,3683,7022,4617,50.00,0.00,50.00,100.00,50.00,100.00");
}

#[test]
fn explicit_credit_leaves_undecided_matches_out() {
    let dir = tmp_dir("explicit");
    let input = dir.join("matches.csv");
    fs::write(&input, MATCHES_CSV).unwrap();
    let matches = read_matches_file(&input).unwrap();

    let opts = ReportOptions { credit: WinCredit::Explicit, ..ReportOptions::default() };
    let report = Report::build(&matches, opts).unwrap();

    assert_eq!(report.teams[&3683].wins, 1);
    assert_eq!(report.teams[&3683].matches_played, 2);
    assert_eq!(report.matches[2].win_rates, [50.0, 0.0, 50.0, 50.0, 0.0, 50.0]);
}

#[test]
fn tsv_input_is_detected_by_extension() {
    let dir = tmp_dir("tsv");
    let input = dir.join("matches.tsv");
    fs::write(&input, MATCHES_CSV.replace(',', "\t")).unwrap();
    assert_eq!(read_matches_file(&input).unwrap().len(), 3);
}

#[test]
fn malformed_file_names_the_row() {
    let dir = tmp_dir("malformed");
    let input = dir.join("bad.csv");
    fs::write(&input, "1,1,0,6875,4678,3683,6992,6070,3739\n2,0,1,8089,x,2702,4903,4617,6978\n").unwrap();
    let err = read_matches_file(&input).unwrap_err();
    assert!(err.to_string().contains("row 2"), "{err}");
}

#[test]
fn teams_table_as_json() {
    let dir = tmp_dir("json");
    let report = Report::build(&sample::qualification_matches(), ReportOptions::default()).unwrap();

    let path = dir.join("teams.json");
    file::export_report_to(&path, ExportFormat::Json, ReportTable::Teams, false, &report).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["4476"]["wins"], 5);
    assert_eq!(v["4476"]["matches_played"], 6);
    assert_eq!(v["4476"]["win_rate"], 83.33);
    assert_eq!(v.as_object().unwrap().len(), 26);
}

#[test]
fn fixed_divisor_applies_to_every_team() {
    let opts = ReportOptions {
        divisor: MatchCount::Fixed(std::num::NonZeroU32::new(12).unwrap()),
        ..ReportOptions::default()
    };
    let report = Report::build(&sample::qualification_matches(), opts).unwrap();
    assert_eq!(report.teams[&4476].win_rate, 41.67);
    assert_eq!(report.teams[&7722].win_rate, 8.33);
}

#[test]
fn empty_input_gives_empty_report_with_headers() {
    let dir = tmp_dir("empty");
    let input = dir.join("empty.csv");
    fs::write(&input, "").unwrap();
    let report = Report::build(&read_matches_file(&input).unwrap(), ReportOptions::default()).unwrap();
    assert!(report.is_empty());

    let mut buf = Vec::new();
    file::write_report(&mut buf, ExportFormat::Tsv, ReportTable::Teams, true, &report).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "Team\tWins\tPlayed\tWin %\n");
}
