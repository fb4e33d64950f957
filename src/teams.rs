// src/teams.rs
//! Static team directory: display name → mlb.com URL slug.

use crate::config::consts::{SITE, STATS_PATH};
use crate::error::{Result, ScrapeError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamEndpoint {
    pub name: &'static str,
    pub slug: &'static str,
}

const fn team(name: &'static str, slug: &'static str) -> TeamEndpoint {
    TeamEndpoint { name, slug }
}

pub const DEFAULT_TEAM: &str = "New York Yankees";

pub static TEAMS: [TeamEndpoint; 30] = [
    team("Arizona Diamondbacks", "dbacks"),
    team("Atlanta Braves", "braves"),
    team("Baltimore Orioles", "orioles"),
    team("Boston Red Sox", "redsox"),
    team("Chicago Cubs", "cubs"),
    team("Chicago White Sox", "whitesox"),
    team("Cincinnati Reds", "reds"),
    team("Cleveland Indians", "indians"),
    team("Colorado Rockies", "rockies"),
    team("Detroit Tigers", "tigers"),
    team("Houston Astros", "astros"),
    team("Kansas City Royals", "royals"),
    team("Los Angeles Angels", "angels"),
    team("Los Angeles Dodgers", "dodgers"),
    team("Miami Marlins", "marlins"),
    team("Milwaukee Brewers", "brewers"),
    team("Minnesota Twins", "twins"),
    team("New York Mets", "mets"),
    team("New York Yankees", "yankees"),
    team("Oakland Athletics", "athletics"),
    team("Philadelphia Phillies", "phillies"),
    team("Pittsburgh Pirates", "pirates"),
    team("San Diego Padres", "padres"),
    team("San Francisco Giants", "giants"),
    team("Seattle Mariners", "mariners"),
    team("St. Louis Cardinals", "cardinals"),
    team("Tampa Bay Rays", "rays"),
    team("Texas Rangers", "rangers"),
    team("Toronto Blue Jays", "bluejays"),
    team("Washington Nationals", "nationals"),
];

/// First entry whose display name contains `name`, ignoring case.
pub fn lookup(name: &str) -> Result<&'static TeamEndpoint> {
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Err(ScrapeError::TeamNotFound(s!(name)));
    }
    TEAMS
        .iter()
        .find(|t| t.name.to_lowercase().contains(&needle))
        .ok_or_else(|| ScrapeError::TeamNotFound(s!(name)))
}

pub fn team_url(slug: &str) -> String {
    join!(SITE, "/", slug, STATS_PATH)
}

/// Convenience for the session default.
pub fn default_url() -> String {
    team_url("yankees")
}
