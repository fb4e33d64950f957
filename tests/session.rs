// tests/session.rs
//
// Fetch cycle against a scripted browser.

mod common;

use std::{
    cell::RefCell,
    panic::{self, AssertUnwindSafe},
    rc::Rc,
    time::Duration,
};

use mlb_scrape::{
    browser::{Launcher, PageDriver, RawBlock},
    config::{consts::PITCHING_BUTTON_XPATH, options::ScrapeOptions},
    error::{ParseError, Result, ScrapeError},
    session::TeamStats,
    table::{Cell, ColumnKind},
};

/// What the fake page shows and what the session did to it.
#[derive(Default)]
struct Page {
    hitting: Option<RawBlock>,
    pitching: Option<RawBlock>,
    /// Clicks needed before the pitching block shows.
    switch_after: u32,
    launch_fails: bool,
    click_panics: bool,

    launches: u32,
    opened: Vec<String>,
    clicks: u32,
    polls: u32,
    closes: u32,
}

type Shared = Rc<RefCell<Page>>;

struct FakeLauncher(Shared);
struct FakeDriver(Shared);

impl Launcher for FakeLauncher {
    type Driver = FakeDriver;

    fn launch(&self, _headless: bool) -> Result<FakeDriver> {
        let mut page = self.0.borrow_mut();
        if page.launch_fails {
            return Err(ScrapeError::Config("no chromedriver".into()));
        }
        page.launches += 1;
        Ok(FakeDriver(self.0.clone()))
    }
}

impl PageDriver for FakeDriver {
    fn open(&mut self, url: &str) -> Result<()> {
        self.0.borrow_mut().opened.push(url.to_string());
        Ok(())
    }

    fn block(&mut self, _xpath: &str) -> Result<Option<RawBlock>> {
        let mut page = self.0.borrow_mut();
        page.polls += 1;
        let shown = if page.clicks >= page.switch_after { &page.pitching } else { &page.hitting };
        Ok(shown.clone())
    }

    fn click(&mut self, xpath: &str) -> Result<()> {
        assert_eq!(xpath, PITCHING_BUTTON_XPATH);
        if self.0.borrow().click_panics {
            panic!("driver crashed mid-click");
        }
        self.0.borrow_mut().clicks += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.0.borrow_mut().closes += 1;
        Ok(())
    }
}

fn page() -> Shared {
    Rc::new(RefCell::new(Page {
        hitting: Some(RawBlock::from_text(common::hitting_block())),
        pitching: Some(RawBlock::from_text(common::pitching_block())),
        switch_after: 2,
        ..Page::default()
    }))
}

fn options() -> ScrapeOptions {
    ScrapeOptions {
        team: "red sox".into(),
        load_timeout: Duration::from_millis(40),
        poll_interval: Duration::from_millis(1),
        ..ScrapeOptions::default()
    }
}

fn session(page: &Shared) -> TeamStats<FakeLauncher> {
    TeamStats::with_launcher(options(), FakeLauncher(page.clone())).unwrap()
}

#[test]
fn full_cycle_fills_both_tables() {
    let page = page();
    let mut s = session(&page);
    assert_eq!(s.url(), "https://www.mlb.com/redsox/stats/team/");
    assert_eq!(s.show_hitting(), "(not fetched)");

    s.pull_data().unwrap();

    let (hit, pitch) = s.stats();
    let (hit, pitch) = (hit.unwrap(), pitch.unwrap());
    assert_eq!((hit.n_rows(), hit.n_cols()), (3, 18));
    assert_eq!((pitch.n_rows(), pitch.n_cols()), (3, 21));

    assert_eq!(hit.cell(2, "Team"), Some(Cell::Text("Tampa Bay Rays")));
    assert_eq!(hit.column("AVG").unwrap().kind(), ColumnKind::Float);
    assert_eq!(hit.column("HR").unwrap().kind(), ColumnKind::Int);
    assert_eq!(pitch.column("WHIP").unwrap().kind(), ColumnKind::Float);
    assert_eq!(pitch.column("SV").unwrap().kind(), ColumnKind::Int);

    let (hit_report, pitch_report) = s.last_reports().unwrap();
    assert_eq!(hit_report.columns(), ["Team"]);
    assert_eq!(pitch_report.columns(), ["Team"]);

    let p = page.borrow();
    assert_eq!(p.opened, [s.url()]);
    assert_eq!(p.clicks, 2);
    assert_eq!((p.launches, p.closes), (1, 1));

    assert!(s.show_pitching().starts_with("Team"));
}

#[test]
fn click_count_follows_options() {
    let page = page();
    page.borrow_mut().switch_after = 3;
    let mut opts = options();
    opts.pitching_clicks = 3;
    let mut s = TeamStats::with_launcher(opts, FakeLauncher(page.clone())).unwrap();

    s.pull_data().unwrap();
    assert_eq!(page.borrow().clicks, 3);
}

#[test]
fn hitting_never_loads() {
    let page = page();
    page.borrow_mut().hitting = None;
    let mut s = session(&page);

    match s.pull_data() {
        Err(ScrapeError::Timeout { what, waited }) => {
            assert_eq!(what, "hitting table");
            assert!(waited >= Duration::from_millis(40));
        }
        other => panic!("expected timeout, got {other:?}"),
    }
    let p = page.borrow();
    assert!(p.polls > 1);
    assert_eq!(p.clicks, 0);
    assert_eq!(p.closes, 1);
    assert_eq!(s.stats(), (None, None));
}

#[test]
fn pitching_never_shows_keeps_previous_tables() {
    let page = page();
    let mut s = session(&page);
    s.pull_data().unwrap();
    let before = s.show_hitting();

    // Clicks stop registering; the block keeps showing hitting.
    page.borrow_mut().switch_after = u32::MAX;
    let err = s.pull_data().unwrap_err();
    assert!(matches!(err, ScrapeError::Timeout { what: "pitching table", .. }), "{err}");

    assert_eq!(s.show_hitting(), before);
    assert!(s.pitching().is_some());
    assert_eq!(page.borrow().closes, 2);
}

#[test]
fn malformed_block_is_a_parse_error_after_close() {
    let page = page();
    let mut broken = common::pitching_block();
    broken.push_str("\n4\nTexas Rangers\n1 2 3\n\n");
    page.borrow_mut().pitching = Some(RawBlock::from_text(broken));
    let mut s = session(&page);

    let err = s.pull_data().unwrap_err();
    assert!(matches!(
        err,
        ScrapeError::Parse(ParseError::RowShape { row: 3, expected: 21, found: 4, .. })
    ), "{err}");
    assert_eq!(page.borrow().closes, 1);
    assert!(s.hitting().is_none());
}

#[test]
fn launch_failure_is_reported() {
    let page = page();
    page.borrow_mut().launch_fails = true;
    let mut s = session(&page);

    assert!(matches!(s.pull_data(), Err(ScrapeError::Config(_))));
    assert_eq!(page.borrow().closes, 0);
}

#[test]
fn change_team_moves_url_only_on_match() {
    let page = page();
    let mut s = session(&page);

    assert_eq!(s.change_team("dodgers").unwrap(), "https://www.mlb.com/dodgers/stats/team/");
    assert_eq!(s.options().team, "Los Angeles Dodgers");

    assert!(matches!(s.change_team("zzz-no-team"), Err(ScrapeError::TeamNotFound(_))));
    assert_eq!(s.url(), "https://www.mlb.com/dodgers/stats/team/");
}

#[test]
fn unknown_team_or_bad_options_fail_construction() {
    let page = page();
    let mut opts = options();
    opts.team = "zzz-no-team".into();
    assert!(matches!(
        TeamStats::with_launcher(opts, FakeLauncher(page.clone())),
        Err(ScrapeError::TeamNotFound(_))
    ));

    let mut opts = options();
    opts.pitching_clicks = 0;
    assert!(matches!(
        TeamStats::with_launcher(opts, FakeLauncher(page.clone())),
        Err(ScrapeError::Config(_))
    ));
}

#[test]
fn headless_flag_is_settable() {
    let page = page();
    let mut s = session(&page);
    assert!(s.headless());
    s.set_headless(false);
    assert!(!s.headless());
}

#[test]
fn panic_mid_fetch_still_closes_browser() {
    let page = page();
    page.borrow_mut().click_panics = true;
    let mut s = session(&page);

    let result = panic::catch_unwind(AssertUnwindSafe(|| s.pull_data()));
    assert!(result.is_err());

    let p = page.borrow();
    assert_eq!((p.launches, p.closes), (1, 1));
    drop(p);
    assert_eq!(s.stats(), (None, None));
}

#[test]
fn team_name_is_the_resolved_display_name() {
    let page = page();
    let mut s = session(&page);
    assert_eq!(s.team_name(), "Boston Red Sox");

    s.change_team("dodgers").unwrap();
    assert_eq!(s.team_name(), "Los Angeles Dodgers");

    assert!(s.change_team("zzz-no-team").is_err());
    assert_eq!(s.team_name(), "Los Angeles Dodgers");
}
