// src/session.rs
//! `TeamStats`: one team's hitting and pitching tables, fetched in a single
//! browser session.
//!
//! Fetch cycle:
//! 1. launch the browser (guarded, closed on every path) and open the team URL;
//! 2. poll the stats block until it holds at least one hitting row;
//! 3. click the Pitching control `pitching_clicks` times;
//! 4. poll until the block changes and holds at least one pitching row;
//! 5. close the browser, then parse and type both blocks.
//!
//! The stored tables are replaced only when the whole cycle succeeds.

use std::{thread, time::Instant};

use tracing::{debug, info};

use crate::{
    browser::{ChromeLauncher, DriverGuard, Launcher, PageDriver, RawBlock},
    coerce::CoercionReport,
    config::{
        consts::{HITTING_HEADER_ROWS, PITCHING_BUTTON_XPATH, PITCHING_HEADER_ROWS, STATS_XPATH},
        options::ScrapeOptions,
    },
    error::{Result, ScrapeError},
    parse::parse_block,
    table::StatTable,
    teams,
};

pub struct TeamStats<L: Launcher = ChromeLauncher> {
    team: &'static str,
    url: String,
    options: ScrapeOptions,
    launcher: L,
    hitting: Option<StatTable>,
    pitching: Option<StatTable>,
    reports: Option<(CoercionReport, CoercionReport)>,
}

impl TeamStats<ChromeLauncher> {
    pub fn new(options: ScrapeOptions) -> Result<Self> {
        let launcher = ChromeLauncher::new(options.webdriver_url.clone());
        Self::with_launcher(options, launcher)
    }
}

impl<L: Launcher> TeamStats<L> {
    pub fn with_launcher(options: ScrapeOptions, launcher: L) -> Result<Self> {
        options.validate()?;
        let team = teams::lookup(&options.team)?;
        Ok(Self {
            team: team.name,
            url: teams::team_url(team.slug),
            options,
            launcher,
            hitting: None,
            pitching: None,
            reports: None,
        })
    }

    /// Display name of the resolved team, e.g. "Boston Red Sox" for "red sox".
    pub fn team_name(&self) -> &'static str { self.team }
    pub fn url(&self) -> &str { &self.url }
    pub fn options(&self) -> &ScrapeOptions { &self.options }
    pub fn headless(&self) -> bool { self.options.headless }
    pub fn set_headless(&mut self, on: bool) { self.options.headless = on; }

    /// Point the session at another team. Unknown names leave it untouched.
    pub fn change_team(&mut self, name: &str) -> Result<&str> {
        let team = teams::lookup(name)?;
        self.team = team.name;
        self.url = teams::team_url(team.slug);
        self.options.team = s!(team.name);
        info!(team = team.name, url = %self.url, "Session: team changed");
        Ok(&self.url)
    }

    pub fn hitting(&self) -> Option<&StatTable> { self.hitting.as_ref() }
    pub fn pitching(&self) -> Option<&StatTable> { self.pitching.as_ref() }

    /// (hitting, pitching)
    pub fn stats(&self) -> (Option<&StatTable>, Option<&StatTable>) {
        (self.hitting.as_ref(), self.pitching.as_ref())
    }

    /// Columns that stayed text on the last successful fetch, (hitting, pitching).
    pub fn last_reports(&self) -> Option<&(CoercionReport, CoercionReport)> {
        self.reports.as_ref()
    }

    pub fn show_hitting(&self) -> String { render(self.hitting.as_ref()) }
    pub fn show_pitching(&self) -> String { render(self.pitching.as_ref()) }

    pub fn pull_data(&mut self) -> Result<()> {
        let started = Instant::now();
        info!(url = %self.url, "Fetch: begin");

        let (hit_block, pitch_block) = self.fetch_blocks()?;

        let (hitting, hit_report) = parse_block(&hit_block, HITTING_HEADER_ROWS)?.coerced();
        let (pitching, pitch_report) = parse_block(&pitch_block, PITCHING_HEADER_ROWS)?.coerced();

        info!(
            hitting_rows = hitting.n_rows(),
            pitching_rows = pitching.n_rows(),
            elapsed = ?started.elapsed(),
            "Fetch: done"
        );

        self.hitting = Some(hitting);
        self.pitching = Some(pitching);
        self.reports = Some((hit_report, pitch_report));
        Ok(())
    }

    fn fetch_blocks(&self) -> Result<(RawBlock, RawBlock)> {
        let mut driver = DriverGuard::new(self.launcher.launch(self.options.headless)?);
        driver.open(&self.url)?;

        let hit = wait_for_block(&mut *driver, &self.options, "hitting table", |b| {
            b.line_count() >= HITTING_HEADER_ROWS + 3
        })?;

        for n in 0..self.options.pitching_clicks {
            debug!(click = n + 1, "Fetch: pitching control");
            driver.click(PITCHING_BUTTON_XPATH)?;
        }

        let pitch = wait_for_block(&mut *driver, &self.options, "pitching table", |b| {
            b.text != hit.text && b.line_count() >= PITCHING_HEADER_ROWS + 3
        })?;

        driver.release()?;
        Ok((hit, pitch))
    }
}

/// Poll the stats block until `ready` holds, up to `load_timeout`.
fn wait_for_block<D: PageDriver + ?Sized>(
    driver: &mut D,
    options: &ScrapeOptions,
    what: &'static str,
    ready: impl Fn(&RawBlock) -> bool,
) -> Result<RawBlock> {
    let start = Instant::now();
    let mut polls = 0u32;
    loop {
        polls += 1;
        if let Some(block) = driver.block(STATS_XPATH)? {
            if ready(&block) {
                debug!(what, polls, elapsed = ?start.elapsed(), "Fetch: block ready");
                return Ok(block);
            }
        }
        let waited = start.elapsed();
        if waited >= options.load_timeout {
            return Err(ScrapeError::Timeout { what, waited });
        }
        thread::sleep(options.poll_interval.min(options.load_timeout - waited));
    }
}

fn render(table: Option<&StatTable>) -> String {
    table.map(|t| t.to_string()).unwrap_or_else(|| s!("(not fetched)"))
}
