// src/gui/components/action_bar.rs
use eframe::egui::{self, RichText};

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button(RichText::new("Fetch").strong()).clicked() {
            actions::fetch(app);
        }

        ui.checkbox(&mut app.state.options.headless, "Headless");

        ui.separator();
        match app.fetched_team {
            Some(team) => ui.label(format!("Showing: {team}")),
            None => ui.label("Nothing fetched"),
        };
    });

    ui.label(&app.status);
}
