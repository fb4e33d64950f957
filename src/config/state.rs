// src/config/state.rs
use super::options::ScrapeOptions;
use crate::teams;

/// Which of the two stat tables is on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatsTab {
    Hitting,
    Pitching,
}

impl StatsTab {
    pub const ALL: [StatsTab; 2] = [StatsTab::Hitting, StatsTab::Pitching];

    pub fn title(self) -> &'static str {
        match self {
            StatsTab::Hitting => "Hitting",
            StatsTab::Pitching => "Pitching",
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Index into `teams::TEAMS`
    pub selected_team: usize,
    pub tab: StatsTab,
}

impl GuiState {
    /// Start on the configured team when it resolves; otherwise the first entry.
    pub fn for_team(name: &str) -> Self {
        let selected_team = teams::lookup(name)
            .ok()
            .and_then(|hit| teams::TEAMS.iter().position(|t| t.slug == hit.slug))
            .unwrap_or(0);
        Self { selected_team, tab: StatsTab::Hitting }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: ScrapeOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: ScrapeOptions) -> Self {
        let gui = GuiState::for_team(&options.team);
        Self { options, gui }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ScrapeOptions::default())
    }
}
