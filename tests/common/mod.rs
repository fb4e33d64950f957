// tests/common/mod.rs
//
// Synthetic stats blocks in the rendered-text layout:
// headers one per line, then marker / team / space-separated fields.
#![allow(dead_code)]

use mlb_scrape::coerce::is_float_column;

pub const HITTING: [&str; 18] = [
    "Team", "G", "AB", "R", "H", "2B", "3B", "HR", "RBI", "BB",
    "SO", "SB", "CS", "AVG", "OBP", "SLG", "OPS", "HBP",
];

pub const PITCHING: [&str; 21] = [
    "Team", "W", "L", "ERA", "G", "GS", "CG", "SHO", "SV", "SVO", "IP",
    "H", "R", "ER", "HR", "HB", "BB", "SO", "WHIP", "AVG", "HLD",
];

pub const TEAMS: [&str; 3] = ["Boston Red Sox", "New York Yankees", "Tampa Bay Rays"];

/// Fields for one team: counts are >= 100, rates look like `0.2xx`.
pub fn fields(headers: &[&str], k: usize) -> String {
    headers[1..]
        .iter()
        .enumerate()
        .map(|(j, h)| {
            if is_float_column(h) { format!("0.{:03}", 200 + k * 10 + j) } else { format!("{}", 100 + k * 3 + j) }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn block(headers: &[&str], teams: &[&str]) -> String {
    let mut lines: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for (k, team) in teams.iter().enumerate() {
        lines.push((k + 1).to_string());
        lines.push(team.to_string());
        lines.push(fields(headers, k));
    }
    lines.join("\n")
}

pub fn hitting_block() -> String { block(&HITTING, &TEAMS) }
pub fn pitching_block() -> String { block(&PITCHING, &TEAMS) }
