// src/cli.rs
use std::io::{self, Write};
use std::num::NonZeroU32;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use log::{info, LevelFilter};

use crate::{
    collect,
    config::consts::{DEFAULT_OUT_DIR, DEFAULT_TRAINING_SUBDIR},
    config::options::{ExportFormat, ExportOptions, FetchOptions, ReportTable, TournamentLevel},
    file,
    model::{MatchRecord, MATCH_HEADERS},
    progress::Progress,
    sample,
    winrate::{MatchCount, Report, ReportOptions, WinCredit},
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Win-rate reports for FRC match results")]
pub struct Cli {
    /// Mirror the debug log to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Matches followed by the six participants' win rates
    Report(ReportArgs),
    /// Per-team wins, matches played and win rate
    Teams(ReportArgs),
    /// Fetch and print normalised match records
    Fetch(FetchArgs),
    /// Write feats.csv + labels.csv for model training
    Training(ReportArgs),
}

#[derive(Args, Debug, Clone)]
struct SourceArgs {
    /// Match file (CSV, or TSV by extension)
    #[arg(short, long, conflicts_with_all = ["sample", "fetch"])]
    input: Option<PathBuf>,

    /// Use the bundled qualification results
    #[arg(long)]
    sample: bool,

    /// Fetch from the match results API (needs API_USERNAME / API_KEY)
    #[arg(long)]
    fetch: bool,

    #[command(flatten)]
    event: FetchArgs,
}

#[derive(Args, Debug, Clone)]
struct FetchArgs {
    #[arg(long, default_value_t = crate::config::consts::DEFAULT_SEASON)]
    season: u16,

    #[arg(long, default_value = crate::config::consts::DEFAULT_EVENT)]
    event: String,

    /// qualification | playoff
    #[arg(long, default_value = "playoff")]
    level: TournamentLevel,
}

#[derive(Args, Debug, Clone)]
struct ReportArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Who gets the win: "source" (blue unless red won) or "explicit" (flags only)
    #[arg(long, default_value = "source")]
    credit: String,

    /// Win-rate divisor: "participation" or a fixed match count
    #[arg(long, default_value = "participation")]
    divisor: String,

    /// Output file or directory; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// csv | tsv | json
    #[arg(long, default_value = "csv")]
    format: ExportFormat,

    #[arg(long)]
    include_headers: bool,
}

impl From<&FetchArgs> for FetchOptions {
    fn from(a: &FetchArgs) -> Self {
        FetchOptions { season: a.season, event_code: a.event.clone(), level: a.level }
    }
}

fn parse_credit(s: &str) -> Result<WinCredit> {
    match s.to_ascii_lowercase().as_str() {
        "source" | "not-red" => Ok(WinCredit::NotRedWin),
        "explicit" => Ok(WinCredit::Explicit),
        other => Err(eyre!("Unknown credit rule: {other}")),
    }
}

fn parse_divisor(s: &str) -> Result<MatchCount> {
    if s.eq_ignore_ascii_case("participation") {
        return Ok(MatchCount::Participation);
    }
    let n: u32 = s.parse().map_err(|_| eyre!("Divisor must be \"participation\" or a number: {s}"))?;
    NonZeroU32::new(n)
        .map(MatchCount::Fixed)
        .ok_or_else(|| eyre!("Divisor must be at least 1"))
}

/// Prints fetch progress to stderr.
struct CliProgress;

impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn begin(&mut self, total: usize) {
        eprintln!("{total} finished match(es)");
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    crate::log::init(level, cli.verbose).map_err(|e| eyre!("logger: {e}"))?;

    match cli.command {
        Command::Report(args) => run_report(&args, ReportTable::Matches),
        Command::Teams(args) => run_report(&args, ReportTable::Teams),
        Command::Fetch(args) => run_fetch(&args),
        Command::Training(args) => run_training(&args),
    }
}

fn load_matches(src: &SourceArgs) -> Result<Vec<MatchRecord>> {
    if let Some(path) = &src.input {
        info!("Input: {}", path.display());
        return file::read_matches_file(path).map_err(|e| eyre!("{e}"));
    }
    if src.fetch {
        let opts = FetchOptions::from(&src.event);
        return collect::collect_matches(&opts, Some(&mut CliProgress)).map_err(|e| eyre!("{e}"));
    }
    if src.sample {
        return Ok(sample::qualification_matches());
    }
    Err(eyre!("Specify --input <file>, --sample or --fetch"))
}

fn build_report(args: &ReportArgs) -> Result<Report> {
    let matches = load_matches(&args.source)?;
    if matches.is_empty() {
        eprintln!("Warning: no matches to report on");
    }
    let options = ReportOptions { credit: parse_credit(&args.credit)?, divisor: parse_divisor(&args.divisor)? };
    Ok(Report::build(&matches, options)?)
}

fn run_report(args: &ReportArgs, table: ReportTable) -> Result<()> {
    let report = build_report(args)?;

    let mut export = ExportOptions::default();
    export.format = args.format;
    export.table = table;
    export.include_headers = args.include_headers;

    match &args.out {
        Some(out) => {
            if out.is_dir() && !file::looks_like_dir_hint(out) {
                export.set_path(&join!(&*out.to_string_lossy(), "/"));
            } else {
                export.set_path(&out.to_string_lossy());
            }
            let path = file::export_report(&export, &report).map_err(|e| eyre!("{e}"))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            file::write_report(&mut lock, export.format, table, export.include_headers, &report)
                .map_err(|e| eyre!("{e}"))?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn run_fetch(args: &FetchArgs) -> Result<()> {
    let opts = FetchOptions::from(args);
    let matches = collect::collect_matches(&opts, Some(&mut CliProgress)).map_err(|e| eyre!("{e}"))?;
    let rows: Vec<Vec<String>> = matches.iter().map(MatchRecord::to_row).collect();
    let text = crate::csv::to_export_string(Some(&MATCH_HEADERS[..]), &rows, b',');
    io::stdout().lock().write_all(text.as_bytes())?;
    Ok(())
}

fn run_training(args: &ReportArgs) -> Result<()> {
    let report = build_report(args)?;
    let dir = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_TRAINING_SUBDIR));
    let (feats, labels) = file::write_training_set(&dir, &report).map_err(|e| eyre!("{e}"))?;
    eprintln!("Wrote {} and {}", feats.display(), labels.display());
    Ok(())
}
