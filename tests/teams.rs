// tests/teams.rs
use std::collections::HashSet;

use mlb_scrape::{
    error::ScrapeError,
    teams::{self, DEFAULT_TEAM, TEAMS},
};

#[test]
fn partial_name_any_case() {
    assert_eq!(teams::lookup("red sox").unwrap().slug, "redsox");
    assert_eq!(teams::lookup("  YANKEES ").unwrap().name, "New York Yankees");
    assert_eq!(teams::lookup("St. Louis").unwrap().slug, "cardinals");
}

#[test]
fn first_match_wins() {
    // Cubs precede White Sox in the directory.
    assert_eq!(teams::lookup("chicago").unwrap().slug, "cubs");
}

#[test]
fn unknown_and_blank_names() {
    assert!(matches!(teams::lookup("zzz-no-team"), Err(ScrapeError::TeamNotFound(n)) if n == "zzz-no-team"));
    assert!(matches!(teams::lookup("   "), Err(ScrapeError::TeamNotFound(_))));
}

#[test]
fn url_shape() {
    assert_eq!(teams::team_url("redsox"), "https://www.mlb.com/redsox/stats/team/");
    assert_eq!(teams::default_url(), teams::team_url(teams::lookup(DEFAULT_TEAM).unwrap().slug));
}

#[test]
fn directory_is_complete_and_unique() {
    assert_eq!(TEAMS.len(), 30);
    let names: HashSet<_> = TEAMS.iter().map(|t| t.name).collect();
    let slugs: HashSet<_> = TEAMS.iter().map(|t| t.slug).collect();
    assert_eq!(names.len(), 30);
    assert_eq!(slugs.len(), 30);
    // Every full name resolves to itself.
    for t in &TEAMS {
        assert_eq!(teams::lookup(t.name).unwrap().slug, t.slug, "{}", t.name);
    }
}
