// src/gui/actions.rs
//
// What the panel buttons do. Layout stays in components/, the work happens here.
// Every action reports back through the status line.

use std::path::{Path, PathBuf};

use eframe::egui;
use log::{debug, error, info};

use crate::collect;
use crate::config::consts::{DEFAULT_OUT_DIR, DEFAULT_TRAINING_SUBDIR};
use crate::file;
use crate::gui::{app::App, progress::GuiProgress};
use crate::sample;

pub fn load_file(app: &mut App) {
    let text = app.state.gui.input_path.trim().to_owned();
    if text.is_empty() {
        app.status("Enter a match file path first");
        return;
    }

    let path = PathBuf::from(&text);
    match file::read_matches_file(&path) {
        Ok(matches) => {
            info!("Load: {} ({} matches)", path.display(), matches.len());
            app.set_matches(matches, path.display().to_string());
        }
        Err(e) => {
            error!("Load: {}: {e}", path.display());
            app.status(format!("Load failed: {e}"));
        }
    }
}

pub fn load_sample(app: &mut App) {
    app.set_matches(sample::qualification_matches(), s!("bundled sample"));
}

/// Blocking fetch on the UI thread; the status line shows the outcome.
pub fn fetch(app: &mut App) {
    let opts = app.state.options.fetch.clone();
    let mut progress = GuiProgress::new(app.status.clone());

    match collect::collect_matches(&opts, Some(&mut progress)) {
        Ok(matches) => {
            let source = format!("{} {} {}", opts.season, opts.event_code.trim().to_ascii_uppercase(), opts.level);
            if matches.is_empty() {
                app.status(format!("No finished matches for {source}"));
            }
            app.set_matches(matches, source);
        }
        Err(e) => app.status(format!("Fetch failed: {e}")),
    }
}

/// Apply a typed output path (if any) before exporting.
fn apply_out_path(app: &mut App) {
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        app.out_path_dirty = false;
    }
    app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
}

pub fn export(app: &mut App) {
    if app.report.is_empty() {
        app.status("Nothing to export");
        debug!("Export: clicked with an empty report");
        return;
    }

    apply_out_path(app);
    let export = &app.state.options.export;
    match file::export_report(export, &app.report) {
        Ok(path) => app.status(format!("Exported {}", path.display())),
        Err(e) => {
            error!("Export: {e}");
            app.status(format!("Export failed: {e}"));
        }
    }
}

pub fn copy(app: &mut App, ctx: &egui::Context) {
    if app.report.is_empty() {
        app.status("Nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let mut buf: Vec<u8> = Vec::new();
    match file::write_report(&mut buf, export.format, export.table, export.include_headers, &app.report) {
        Ok(()) => {
            ctx.copy_text(String::from_utf8_lossy(&buf).into_owned());
            debug!("Copy: {:?} as {:?}, {} bytes", export.table, export.format, buf.len());
            app.status("Copied to clipboard");
        }
        Err(e) => app.status(format!("Copy failed: {e}")),
    }
}

/// `feats.csv` + `labels.csv` next to the export path, under `model/`.
pub fn training_set(app: &mut App) {
    if app.report.is_empty() {
        app.status("Nothing to write");
        return;
    }

    apply_out_path(app);
    let dir = training_dir(app.state.options.export.current_dir());
    match file::write_training_set(&dir, &app.report) {
        Ok((feats, labels)) => app.status(format!("Wrote {} and {}", feats.display(), labels.display())),
        Err(e) => {
            error!("Training set: {e}");
            app.status(format!("Training set failed: {e}"));
        }
    }
}

fn training_dir(export_dir: &Path) -> PathBuf {
    if export_dir.as_os_str().is_empty() {
        PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_TRAINING_SUBDIR)
    } else {
        export_dir.join(DEFAULT_TRAINING_SUBDIR)
    }
}
