// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{config::options::ScrapeOptions, session::TeamStats, teams};

#[derive(Parser, Debug)]
#[command(name = "mlb_scrape", version, about = "Fetch an MLB team's hitting and pitching stats")]
pub struct Args {
    /// Team name or any part of it, e.g. "red sox"
    pub team: Option<String>,

    /// Print `slug,name` for every known team and exit
    #[arg(long)]
    pub list_teams: bool,

    /// Print the team's stats URL and exit without opening a browser
    #[arg(long)]
    pub url_only: bool,

    #[arg(long, value_enum, default_value_t = Which::Both)]
    pub table: Which,

    /// chromedriver endpoint
    #[arg(long, value_name = "URL")]
    pub webdriver: Option<String>,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Readiness wait per table
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Clicks on the Pitching control
    #[arg(long, value_name = "N")]
    pub clicks: Option<u32>,

    /// TOML options file (defaults to ./mlb_scrape.toml when present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Which {
    Hitting,
    Pitching,
    Both,
}

impl Args {
    /// File options, then command-line overrides.
    pub fn options(&self) -> crate::error::Result<ScrapeOptions> {
        let mut opts = ScrapeOptions::load_or_default(self.config.as_deref())?;
        if let Some(team) = &self.team { opts.team = team.clone(); }
        if let Some(url) = &self.webdriver { opts.webdriver_url = url.clone(); }
        if self.headed { opts.headless = false; }
        if let Some(secs) = self.timeout { opts.load_timeout = Duration::from_secs(secs); }
        if let Some(n) = self.clicks { opts.pitching_clicks = n; }
        opts.validate()?;
        Ok(opts)
    }
}

pub fn run(args: Args) -> Result<()> {
    if args.list_teams {
        for t in &teams::TEAMS {
            println!("{},{}", t.slug, t.name);
        }
        return Ok(());
    }

    let opts = args.options().wrap_err("loading options")?;
    let mut session = TeamStats::new(opts)?;
    let team = session.team_name();

    if args.url_only {
        println!("{}", session.url());
        return Ok(());
    }

    session
        .pull_data()
        .wrap_err_with(|| format!("fetching {}", session.url()))?;

    if matches!(args.table, Which::Hitting | Which::Both) {
        println!("== {team}: hitting ==");
        print!("{}", session.show_hitting());
    }
    if matches!(args.table, Which::Pitching | Which::Both) {
        if args.table == Which::Both { println!(); }
        println!("== {team}: pitching ==");
        print!("{}", session.show_pitching());
    }

    if let Some((hit, pitch)) = session.last_reports() {
        eprintln!("hitting: {hit}");
        eprintln!("pitching: {pitch}");
    }
    Ok(())
}
