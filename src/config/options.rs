// src/config/options.rs
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::winrate::ReportOptions;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub fetch: FetchOptions,
    pub report: ReportOptions,
    pub export: ExportOptions,
}

/* ---------------- Fetch ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TournamentLevel {
    Qualification,
    Playoff,
}

impl TournamentLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TournamentLevel::Qualification => "Qualification",
            TournamentLevel::Playoff => "Playoff",
        }
    }
}

impl fmt::Display for TournamentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TournamentLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "qual" | "qualification" => Ok(TournamentLevel::Qualification),
            "playoff" | "playoffs" => Ok(TournamentLevel::Playoff),
            other => Err(format!("Unknown tournament level: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchOptions {
    pub season: u16,
    pub event_code: String,
    pub level: TournamentLevel,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            event_code: s!(DEFAULT_EVENT),
            level: TournamentLevel::Playoff,
        }
    }
}

impl FetchOptions {
    /// Full URL of the event's match results.
    pub fn url(&self) -> String {
        format!(
            "{}/{}/matches/{}?tournamentLevel={}",
            API_BASE,
            self.season,
            self.event_code.trim().to_ascii_uppercase(),
            self.level
        )
    }
}

/* ---------------- Export ---------------- */

/// Which table of a report gets exported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportTable {
    #[default]
    Matches,
    Teams,
}

impl ReportTable {
    pub fn default_stem(&self) -> &'static str {
        match self {
            ReportTable::Matches => DEFAULT_REPORT_FILE,
            ReportTable::Teams => DEFAULT_TEAMS_FILE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; JSON has none.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("Unknown format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub table: ReportTable,
    pub include_headers: bool,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            table: ReportTable::Matches,
            include_headers: false,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the extension always follows the format.
    pub fn out_path(&self) -> PathBuf {
        let stem = self
            .out_path
            .file_stem
            .clone()
            .unwrap_or_else(|| OsString::from(self.table.default_stem()));
        let file = join!(&*stem.to_string_lossy(), ".", self.format.ext());
        self.out_path.dir.join(file)
    }

    pub fn current_dir(&self) -> &Path {
        &self.out_path.dir
    }

    /// Parse user text into dir + stem. A trailing separator means "directory only"
    /// and keeps the table's default file name. Pasted extensions are ignored.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            self.out_path = OutputPath::default();
            return;
        }

        if s.ends_with('/') || s.ends_with('\\') {
            self.out_path.dir = PathBuf::from(s);
            self.out_path.file_stem = None;
            return;
        }

        let p = Path::new(s);
        self.out_path.dir = p.parent().map(Path::to_path_buf).unwrap_or_default();
        self.out_path.file_stem = p.file_stem().map(|stem| stem.to_os_string());
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: Option<OsString>, // None → table default
}

impl Default for OutputPath {
    fn default() -> Self {
        Self { dir: PathBuf::from(DEFAULT_OUT_DIR), file_stem: None }
    }
}
