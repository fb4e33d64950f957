// src/gui/components/tabs.rs
use eframe::egui;
use tracing::debug;

use crate::{config::state::StatsTab, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for tab in StatsTab::ALL {
            let selected = tab == app.current_tab();
            if ui.selectable_label(selected, tab.title()).clicked() && !selected {
                debug!(from = ?app.state.gui.tab, to = ?tab, "UI: Tab switch");
                app.state.gui.tab = tab;
            }
        }
    });
}
