// src/csv.rs
use std::io::{Read, Write};

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::model::MatchRecord;

/* ---------------- Parsing ---------------- */

/// Read match rows (9 integer fields each) from CSV/TSV text.
///
/// A leading header row is tolerated: the first row is skipped only when none of its
/// cells is a number. Blank lines are ignored. Errors name the 1-based line.
pub fn read_match_records<R: Read>(reader: R, delim: u8) -> Result<Vec<MatchRecord>, Box<dyn std::error::Error>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delim)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line() as usize).unwrap_or(i + 1);

        if rec.iter().all(str::is_empty) {
            continue;
        }
        if i == 0 && looks_like_header(&rec) {
            continue;
        }

        let cells: Vec<&str> = rec.iter().collect();
        let record = MatchRecord::from_row(&cells).map_err(|e| e.at_row(line))?;
        out.push(record);
    }
    Ok(out)
}

fn looks_like_header(rec: &csv::StringRecord) -> bool {
    rec.iter().all(|c| c.parse::<i64>().is_err())
}

/// Parse match rows straight from a string (e.g. pasted text).
pub fn parse_match_text(text: &str, delim: u8) -> Result<Vec<MatchRecord>, Box<dyn std::error::Error>> {
    read_match_records(text.as_bytes(), delim)
}

/* ---------------- Writing ---------------- */

/// Write rows (and optional headers) to any writer.
pub fn write_rows<W: Write>(
    w: W,
    headers: Option<&[&str]>,
    rows: &[Vec<String>],
    delim: u8,
) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new().delimiter(delim).flexible(true).from_writer(w);
    if let Some(h) = headers {
        wtr.write_record(h)?;
    }
    for r in rows {
        wtr.write_record(r)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create a full export string (Copy/Export) from rows.
pub fn to_export_string(headers: Option<&[&str]>, rows: &[Vec<String>], delim: u8) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_rows(&mut buf, headers, rows, delim);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
