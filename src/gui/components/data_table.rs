// src/gui/components/data_table.rs
//
// Typed stats table. Numbers are centered, text is left-aligned.

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column as ColumnSpec, TableBuilder};

use crate::{
    gui::app::App,
    table::{ColumnKind, format_cell},
};

const TEXT_WIDTH: f32 = 180.0;
const NUMBER_WIDTH: f32 = 56.0;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let tab = app.current_tab();
    let Some(table) = app.current_table() else {
        ui.label(format!("No {} data yet. Press Fetch.", tab.title().to_lowercase()));
        return;
    };
    if table.is_empty() {
        ui.label("The page returned no rows.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("stats_hscroll")
        .show(ui, |ui| {
            let mut builder = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("stats_table", tab));

            for col in table.columns() {
                let w = if col.kind() == ColumnKind::Text { TEXT_WIDTH } else { NUMBER_WIDTH };
                builder = builder.column(ColumnSpec::initial(w).at_least(24.0).resizable(true).clip(true));
            }

            builder
                .header(24.0, |mut header| {
                    for col in table.columns() {
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(col.name()).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.n_rows(), |mut row| {
                        let i = row.index();
                        for col in table.columns() {
                            row.col(|ui| {
                                let Some(cell) = col.data().get(i) else { return };
                                let text = format_cell(col.name(), cell);
                                if col.kind() == ColumnKind::Text {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(text);
                                    });
                                } else {
                                    ui.centered_and_justified(|ui| {
                                        ui.label(text);
                                    });
                                }
                            });
                        }
                    });
                });
        });
}
