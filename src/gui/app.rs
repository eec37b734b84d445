// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;
use log::{error, info};

use crate::{
    config::state::AppState,
    model::MatchRecord,
    sample,
    winrate::Report,
};

use super::{components, table_model::TableData};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "FRC Scout",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // loaded matches and where they came from
    pub matches: Vec<MatchRecord>,
    pub source: String,

    // derived from matches + report options
    pub report: Report,
    pub table: TableData,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();

        let mut app = Self {
            state,
            matches: Vec::new(),
            source: s!(),
            report: Report::default(),
            table: TableData::default(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
        };

        // Start on the bundled results so the tables are never blank on first launch.
        app.set_matches(sample::qualification_matches(), s!("bundled sample"));
        info!("Init: {} matches from {}", app.matches.len(), app.source);
        app
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Replace the loaded matches and recompute everything downstream.
    pub fn set_matches(&mut self, matches: Vec<MatchRecord>, source: String) {
        self.matches = matches;
        self.source = source;
        if self.rebuild_report() {
            self.status(format!(
                "Loaded {} match(es), {} team(s) from {}",
                self.matches.len(),
                self.report.teams.len(),
                self.source
            ));
        }
    }

    /// Recompute the report after the matches or report options changed.
    /// Returns false (and clears the tables) when the matches are inconsistent.
    pub fn rebuild_report(&mut self) -> bool {
        let ok = match Report::build(&self.matches, self.state.options.report) {
            Ok(report) => {
                self.report = report;
                true
            }
            Err(e) => {
                error!("Report: {e}");
                self.report = Report::default();
                self.status(format!("Report failed: {e}"));
                false
            }
        };
        self.rebuild_view();
        ok
    }

    pub fn rebuild_view(&mut self) {
        self.table = TableData::from_report(&self.report, self.state.gui.current_table);
    }

    /// Keep the output field in step with the export options unless the user typed in it.
    pub fn refresh_out_path_text(&mut self) {
        if !self.out_path_dirty {
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("source")
            .resizable(false)
            .show(ctx, |ui| {
                components::source_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);
            ui.separator();
            components::export_bar::draw(ui, self);
            ui.separator();
            components::data_table::draw(ui, self);
        });
    }
}
