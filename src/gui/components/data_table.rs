// src/gui/components/data_table.rs
//
// Draws the current table. Purely a view over `app.table`.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let table = &app.table;
    let kind = app.state.gui.current_table;

    if table.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No matches loaded").weak());
        });
        return;
    }

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .id_salt(("report_table", kind))
                .striped(true)
                .cell_layout(Layout::right_to_left(Align::Center))
                .min_scrolled_height(0.0);
            for ci in 0..table.ncols() {
                builder = builder.column(
                    Column::initial(table.column_width(kind, ci))
                        .resizable(true)
                        .clip(true)
                        .at_least(32.0),
                );
            }

            builder
                .header(24.0, |mut header| {
                    for h in &table.headers {
                        header.col(|ui| {
                            ui.strong(h);
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.nrows(), |mut row| {
                        let r = &table.rows[row.index()];
                        for cell in r {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
