// src/gui/components/tabs.rs
//
// Top tabs. Switching tabs also switches which table Copy/Export write.

use eframe::egui;
use log::debug;

use crate::config::options::ReportTable;
use crate::gui::app::App;

const TABS: [(ReportTable, &str); 2] = [(ReportTable::Matches, "Matches"), (ReportTable::Teams, "Teams")];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.state.gui.current_table;
        for (table, title) in TABS {
            let selected = table == cur;
            if ui.selectable_label(selected, title).clicked() && !selected {
                debug!("UI: tab switch {:?} → {:?}", cur, table);
                app.state.gui.current_table = table;
                app.state.options.export.table = table;
                app.rebuild_view();
                app.refresh_out_path_text();
            }
        }

        ui.separator();
        ui.label(format!(
            "{} match(es) · {} team(s) · {}",
            app.report.matches.len(),
            app.report.teams.len(),
            app.source
        ));
    });
}
