// src/config/options.rs
use std::{fs, path::Path, time::Duration};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Result, ScrapeError};
use crate::teams::DEFAULT_TEAM;

/// Everything a fetch cycle needs to know, after file + CLI overrides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub team: String,
    pub headless: bool,
    pub webdriver_url: String,
    /// Upper bound on each readiness wait.
    pub load_timeout: Duration,
    pub poll_interval: Duration,
    pub pitching_clicks: u32,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            team: s!(DEFAULT_TEAM),
            headless: true,
            webdriver_url: s!(DEFAULT_WEBDRIVER_URL),
            load_timeout: Duration::from_secs(LOAD_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(POLL_INTERVAL_MS),
            pitching_clicks: PITCHING_CLICKS,
        }
    }
}

/// On-disk shape. Every key is optional and falls back to the default.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OptionsFile {
    team: Option<String>,
    headless: Option<bool>,
    webdriver_url: Option<String>,
    load_timeout_secs: Option<u64>,
    poll_interval_ms: Option<u64>,
    pitching_clicks: Option<u32>,
}

impl ScrapeOptions {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Explicit path must exist; otherwise use `mlb_scrape.toml` if present, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None if Path::new(CONFIG_FILE).is_file() => Self::load(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: OptionsFile = toml::from_str(text)?;
        let mut opts = Self::default();

        if let Some(team) = file.team { opts.team = team; }
        if let Some(headless) = file.headless { opts.headless = headless; }
        if let Some(url) = file.webdriver_url { opts.webdriver_url = url; }
        if let Some(secs) = file.load_timeout_secs { opts.load_timeout = Duration::from_secs(secs); }
        if let Some(ms) = file.poll_interval_ms { opts.poll_interval = Duration::from_millis(ms); }
        if let Some(n) = file.pitching_clicks { opts.pitching_clicks = n; }

        opts.validate()?;
        Ok(opts)
    }

    pub fn validate(&self) -> Result<()> {
        if self.pitching_clicks == 0 {
            return Err(ScrapeError::Config(s!("pitching_clicks must be at least 1")));
        }
        if self.poll_interval.is_zero() {
            return Err(ScrapeError::Config(s!("poll_interval_ms must be positive")));
        }
        if self.webdriver_url.trim().is_empty() {
            return Err(ScrapeError::Config(s!("webdriver_url is empty")));
        }
        Ok(())
    }
}
