// src/gui/actions/fetch.rs
use tracing::{error, info};

use crate::gui::app::App;

/// Runs the whole browser session on the UI thread; the window stalls until it returns.
pub fn fetch(app: &mut App) {
    let team = app.selected_team().name;
    app.session.set_headless(app.state.options.headless);

    info!(team, url = app.session.url(), "Fetch: clicked");

    match app.session.pull_data() {
        Ok(()) => {
            app.fetched_team = Some(team);
            let msg = match app.session.last_reports() {
                Some((hit, pitch)) if !(hit.is_clean() && pitch.is_clean()) => {
                    format!("Fetched {team} (hitting: {hit}; pitching: {pitch})")
                }
                _ => format!("Fetched {team}"),
            };
            app.status(msg);
        }
        Err(e) => {
            error!(team, error = %e, "Fetch: failed");
            app.status(format!("Error: {e}"));
        }
    }
}
