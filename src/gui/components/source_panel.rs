// src/gui/components/source_panel.rs
//
// Left panel: where matches come from, and how wins are counted.

use std::num::NonZeroU32;

use eframe::egui;
use log::debug;

use crate::config::options::TournamentLevel;
use crate::gui::{actions, app::App};
use crate::winrate::{MatchCount, WinCredit};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Matches");

    ui.label("File (CSV/TSV):");
    ui.add(egui::TextEdit::singleline(&mut app.state.gui.input_path).font(egui::TextStyle::Monospace));
    ui.horizontal(|ui| {
        if ui.button("Load").clicked() {
            actions::load_file(app);
        }
        if ui.button("Sample").on_hover_text("Bundled qualification results").clicked() {
            actions::load_sample(app);
        }
    });

    ui.separator();
    ui.heading("Events API");
    fetch_fields(ui, app);

    ui.separator();
    ui.heading("Win rate");
    report_options(ui, app);
}

fn fetch_fields(ui: &mut egui::Ui, app: &mut App) {
    let fetch = &mut app.state.options.fetch;

    egui::Grid::new("fetch_grid").num_columns(2).show(ui, |ui| {
        ui.label("Season");
        ui.add(egui::DragValue::new(&mut fetch.season).range(1992..=2100));
        ui.end_row();

        ui.label("Event");
        ui.add(egui::TextEdit::singleline(&mut fetch.event_code).desired_width(80.0));
        ui.end_row();

        ui.label("Level");
        egui::ComboBox::from_id_salt("level")
            .selected_text(fetch.level.as_str())
            .show_ui(ui, |ui| {
                for level in [TournamentLevel::Qualification, TournamentLevel::Playoff] {
                    ui.selectable_value(&mut fetch.level, level, level.as_str());
                }
            });
        ui.end_row();
    });

    if ui
        .button("Fetch")
        .on_hover_text("Needs API_USERNAME and API_KEY (environment or .env)")
        .clicked()
    {
        actions::fetch(app);
    }
}

fn report_options(ui: &mut egui::Ui, app: &mut App) {
    let before = app.state.options.report;
    let report = &mut app.state.options.report;

    ui.label("Blue is credited when:");
    ui.radio_value(&mut report.credit, WinCredit::NotRedWin, "red did not win");
    ui.radio_value(&mut report.credit, WinCredit::Explicit, "blue won");

    ui.add_space(4.0);
    ui.label("Divide wins by:");
    ui.radio_value(&mut report.divisor, MatchCount::Participation, "matches played");

    let fixed_n = &mut app.state.gui.fixed_divisor;
    ui.horizontal(|ui| {
        let is_fixed = matches!(report.divisor, MatchCount::Fixed(_));
        if ui.radio(is_fixed, "fixed count").clicked() && !is_fixed {
            report.divisor = fixed(*fixed_n);
        }
        let changed = ui
            .add_enabled(is_fixed, egui::DragValue::new(&mut *fixed_n).range(1..=999))
            .changed();
        if changed && is_fixed {
            report.divisor = fixed(*fixed_n);
        }
    });

    if app.state.options.report != before {
        debug!("UI: report options → {:?}", app.state.options.report);
        if app.rebuild_report() {
            app.status("Report updated");
        }
    }
}

fn fixed(n: u32) -> MatchCount {
    NonZeroU32::new(n).map_or(MatchCount::Participation, MatchCount::Fixed)
}
