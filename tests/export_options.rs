// tests/export_options.rs
use std::path::PathBuf;

use frc_scout::config::options::{ExportFormat, ExportOptions, ReportTable};

#[test]
fn table_switch_changes_default_file_name_only() {
    let mut e = ExportOptions::default();
    e.set_path("exports/");
    assert_eq!(e.out_path(), PathBuf::from("exports/").join("report.csv"));

    e.table = ReportTable::Teams;
    assert_eq!(e.out_path(), PathBuf::from("exports/").join("teams.csv"));
}

#[test]
fn user_stem_survives_format_and_table_changes() {
    let mut e = ExportOptions::default();
    e.set_path("exports/onwat");
    e.table = ReportTable::Teams;
    e.format = ExportFormat::Json;
    assert_eq!(e.out_path(), PathBuf::from("exports").join("onwat.json"));
}

#[test]
fn bare_file_name_lands_in_working_dir() {
    let mut e = ExportOptions::default();
    e.set_path("quals.tsv");
    e.format = ExportFormat::Tsv;
    assert_eq!(e.out_path(), PathBuf::from("quals.tsv"));
    assert_eq!(e.current_dir(), PathBuf::from("").as_path());
}

#[test]
fn blank_text_restores_default() {
    let mut e = ExportOptions::default();
    e.set_path("somewhere/else");
    e.set_path("   ");
    assert_eq!(e, ExportOptions::default());
}
