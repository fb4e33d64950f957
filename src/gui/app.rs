// src/gui/app.rs
use std::error::Error;

use eframe::egui;
use tracing::info;

use crate::{
    config::state::{AppState, StatsTab},
    session::TeamStats,
    table::StatTable,
    teams,
};

use super::components::{action_bar, data_table, tabs, team_panel};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    let session = TeamStats::new(state.options.clone())?;
    eframe::run_native(
        "MLB Team Stats",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state, session)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: TeamStats,

    /// Team the displayed tables belong to; `None` until the first fetch.
    pub fetched_team: Option<&'static str>,
    pub status: String,
}

impl App {
    pub fn new(state: AppState, session: TeamStats) -> Self {
        info!(team = %state.options.team, url = session.url(), "Init: GUI ready");
        Self { state, session, fetched_team: None, status: s!("Idle") }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn selected_team(&self) -> &'static teams::TeamEndpoint {
        &teams::TEAMS[self.state.gui.selected_team]
    }

    #[inline]
    pub fn current_tab(&self) -> StatsTab { self.state.gui.tab }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) { self.status = msg.into(); }

    /// Table for the visible tab, if fetched.
    pub fn current_table(&self) -> Option<&StatTable> {
        match self.current_tab() {
            StatsTab::Hitting => self.session.hitting(),
            StatsTab::Pitching => self.session.pitching(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("teams")
            .resizable(false)
            .show(ctx, |ui| {
                team_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            tabs::draw(ui, self);

            ui.separator();

            action_bar::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
