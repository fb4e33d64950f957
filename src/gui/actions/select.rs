// src/gui/actions/select.rs
use tracing::{error, info};

use crate::{gui::app::App, teams};

pub fn select_team(app: &mut App, idx: usize) {
    let Some(team) = teams::TEAMS.get(idx) else { return };
    if idx == app.state.gui.selected_team { return; }

    match app.session.change_team(team.name) {
        Ok(url) => {
            info!(team = team.name, url, "UI: Team selected");
            app.state.gui.selected_team = idx;
            app.state.options.team = s!(team.name);
            app.status(format!("Selected {}, not fetched yet", team.name));
        }
        Err(e) => {
            error!(team = team.name, error = %e, "UI: Team change failed");
            app.status(format!("Error: {e}"));
        }
    }
}
