// src/gui/components/export_bar.rs
//
// Format, headers, output path, and the Copy / Export / Training set buttons.

use eframe::egui;
use log::debug;

use crate::config::options::ExportFormat;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Format:");
        let before = app.state.options.export.format;
        let export = &mut app.state.options.export;
        for (format, label) in [(ExportFormat::Csv, "CSV"), (ExportFormat::Tsv, "TSV"), (ExportFormat::Json, "JSON")] {
            ui.selectable_value(&mut export.format, format, label);
        }

        // JSON always carries field names
        let is_json = matches!(export.format, ExportFormat::Json);
        ui.add_enabled(!is_json, egui::Checkbox::new(&mut export.include_headers, "Include headers"));

        if export.format != before {
            debug!("UI: export format → {:?}", export.format);
            app.refresh_out_path_text();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text).font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
        if ui
            .button("Training set")
            .on_hover_text("feats.csv + labels.csv under model/")
            .clicked()
        {
            actions::training_set(app);
        }

        ui.label(app.status_text());
    });
}
