// src/parse.rs
//! # Stats block parsing
//!
//! Turns one rendered stats block into an all-text `StatTable`. Typing is a
//! separate pass (`coerce`).
//!
//! ## Two readers
//! - **Structured** (`parse_html`): walk the block's `<table>` with `scraper`.
//!   Headers come from `thead th` (preferring the `<abbr>` label), rows from
//!   `tbody tr`. Used whenever the block HTML carries a table with rows and
//!   the expected column count.
//! - **Text** (`parse_text`): the rendered inner text, one field per line:
//!   ```text
//!   <header 1> … <header N>     first `header_rows` lines
//!   1                           marker (≤ 2 chars)
//!   Boston Red Sox              team name
//!   162 5600 829 …              space-separated fields
//!   2
//!   …
//!   ```
//!   Any line of two characters or fewer opens a row: the next line is the
//!   team, the one after that its fields. The final two lines are never
//!   treated as markers, so a row can't run off the end.
//!
//! ## Shape checking
//! Both readers refuse ragged output: a row whose field count differs from
//! the header count is a `ParseError::RowShape` naming the row and team.
//! A three-digit rank or a two-letter team name still confuses the marker
//! heuristic; the shape check is what catches the misalignment.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::browser::RawBlock;
use crate::error::ParseError;
use crate::table::StatTable;

/// Longest line still read as a row marker.
pub const MARKER_MAX_CHARS: usize = 2;

pub fn is_marker(line: &str) -> bool {
    line.chars().count() <= MARKER_MAX_CHARS
}

/// Prefer the structured table when it has rows and exactly `header_rows`
/// columns; otherwise fall back to the text heuristic.
pub fn parse_block(block: &RawBlock, header_rows: usize) -> Result<StatTable, ParseError> {
    if block.html.to_ascii_lowercase().contains("<table") {
        match parse_html(&block.html) {
            Ok(table) if table.is_empty() => debug!("Parse: <table> had no body rows, using text"),
            Ok(table) if table.n_cols() != header_rows => debug!(
                found = table.n_cols(),
                expected = header_rows,
                "Parse: <table> width mismatch, using text"
            ),
            Ok(table) => return Ok(table),
            Err(e) => debug!(error = %e, "Parse: structured read failed, using text"),
        }
    }
    parse_text(&block.text, header_rows)
}

pub fn parse_text(raw: &str, header_rows: usize) -> Result<StatTable, ParseError> {
    let lines: Vec<&str> = raw
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    if lines.len() < header_rows {
        return Err(ParseError::MissingHeaders { expected: header_rows, found: lines.len() });
    }
    let (head, body) = lines.split_at(header_rows);
    let headers: Vec<String> = head.iter().map(|h| s!(h.trim())).collect();

    let rows = scan_rows(body);
    check_shape(&rows, headers.len())?;

    debug!(headers = headers.len(), rows = rows.len(), "Parse: text block");
    Ok(StatTable::from_rows(headers, rows)?)
}

/// Marker/team/fields triplets → `[team, field…]` rows. No shape checks.
pub fn scan_rows(lines: &[&str]) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    for i in 0..lines.len().saturating_sub(2) {
        if !is_marker(lines[i]) {
            continue;
        }
        let mut row = vec![s!(lines[i + 1])];
        row.extend(lines[i + 2].split(' ').map(String::from));
        rows.push(row);
    }
    rows
}

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static HEAD_CELLS: LazyLock<Selector> = LazyLock::new(|| selector("thead th"));
static BODY_ROWS: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static ROW_CELLS: LazyLock<Selector> = LazyLock::new(|| selector("td, th"));
static ABBR: LazyLock<Selector> = LazyLock::new(|| selector("abbr"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

pub fn parse_html(html: &str) -> Result<StatTable, ParseError> {
    let doc = Html::parse_fragment(html);
    let table = doc.select(&TABLE).next().ok_or(ParseError::NoTable)?;

    let headers: Vec<String> = table
        .select(&HEAD_CELLS)
        .map(|th| th.select(&ABBR).next().map(text_of).unwrap_or_else(|| text_of(th)))
        .collect();

    let rows: Vec<Vec<String>> = table
        .select(&BODY_ROWS)
        .map(|tr| tr.select(&ROW_CELLS).map(text_of).collect::<Vec<_>>())
        .filter(|cells| !cells.is_empty())
        .collect();

    check_shape(&rows, headers.len())?;

    debug!(headers = headers.len(), rows = rows.len(), "Parse: html table");
    Ok(StatTable::from_rows(headers, rows)?)
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

fn check_shape(rows: &[Vec<String>], expected: usize) -> Result<(), ParseError> {
    match rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
        Some((row, r)) => Err(ParseError::RowShape {
            row,
            team: r.first().cloned().unwrap_or_default(),
            expected,
            found: r.len(),
        }),
        None => Ok(()),
    }
}
