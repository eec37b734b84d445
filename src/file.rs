// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;

use crate::config::consts::{FEATURES_FILE, LABELS_FILE};
use crate::config::options::{ExportFormat, ExportOptions, ReportTable};
use crate::csv::{read_match_records, write_rows};
use crate::model::{MatchRecord, ENRICHED_HEADERS};
use crate::winrate::{Report, TEAM_HEADERS};

/// Read a match file. `.tsv` files are tab-separated, everything else comma-separated.
pub fn read_matches_file(path: &Path) -> Result<Vec<MatchRecord>, Box<dyn Error>> {
    let delim = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") => b'\t',
        _ => b',',
    };
    let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;
    read_match_records(BufReader::new(file), delim)
}

/// Write the selected table of `report` according to `export`.
/// Returns the final path written to.
pub fn export_report(export: &ExportOptions, report: &Report) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    export_report_to(&path, export.format, export.table, export.include_headers, report)?;
    Ok(path)
}

/// Same as `export_report` with an explicit destination.
pub fn export_report_to(
    path: &Path,
    format: ExportFormat,
    table: ReportTable,
    include_headers: bool,
    report: &Report,
) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?); // truncate/overwrite
    write_report(&mut out, format, table, include_headers, report)?;
    out.flush()?;

    info!("Export: {:?} as {:?} → {}", table, format, path.display());
    Ok(())
}

/// Serialise one table of `report` to any writer (file, stdout, clipboard buffer).
pub fn write_report<W: Write>(
    mut out: W,
    format: ExportFormat,
    table: ReportTable,
    include_headers: bool,
    report: &Report,
) -> Result<(), Box<dyn Error>> {
    match format.delimiter() {
        Some(delim) => {
            let (headers, rows) = match table {
                ReportTable::Matches => (&ENRICHED_HEADERS[..], report.match_rows()),
                ReportTable::Teams => (&TEAM_HEADERS[..], report.team_rows()),
            };
            let headers = include_headers.then_some(headers);
            write_rows(&mut out, headers, &rows, delim)?;
        }
        None => {
            match table {
                ReportTable::Matches => serde_json::to_writer_pretty(&mut out, &report.matches)?,
                ReportTable::Teams => serde_json::to_writer_pretty(&mut out, &report.teams)?,
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Training inputs for a match-outcome model:
/// `feats.csv` = six team numbers then their six win rates, `labels.csv` = red win (0/1).
pub fn write_training_set(dir: &Path, report: &Report) -> Result<(PathBuf, PathBuf), Box<dyn Error>> {
    ensure_directory(dir)?;

    let mut feats = Vec::with_capacity(report.matches.len());
    let mut labels = Vec::with_capacity(report.matches.len());
    for m in &report.matches {
        let mut row: Vec<String> = m.record.teams().map(|(_, t)| t.to_string()).collect();
        row.extend(m.win_rates.iter().map(|r| format!("{r:.2}")));
        feats.push(row);
        labels.push(row![u8::from(m.record.red_win)]);
    }

    let feats_path = dir.join(FEATURES_FILE);
    let labels_path = dir.join(LABELS_FILE);
    write_rows(BufWriter::new(File::create(&feats_path)?), None, &feats, b',')?;
    write_rows(BufWriter::new(File::create(&labels_path)?), None, &labels, b',')?;

    info!("Export: training set ({} rows) → {}", feats.len(), dir.display());
    Ok((feats_path, labels_path))
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
