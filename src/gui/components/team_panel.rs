// src/gui/components/team_panel.rs
//
// Left team list. One team at a time; clicking switches the session's URL.

use eframe::egui;

use crate::{
    gui::{actions, app::App},
    teams,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Teams");
    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_salt("teams_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for (idx, team) in teams::TEAMS.iter().enumerate() {
                let is_selected = idx == app.state.gui.selected_team;
                if ui.selectable_label(is_selected, team.name).clicked() {
                    clicked = Some(idx);
                }
            }
        });

    if let Some(idx) = clicked {
        actions::select_team(app, idx);
    }
}
