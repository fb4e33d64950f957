// src/error.rs
use std::time::Duration;

use thiserror::Error;

/// Shape problems found while assembling a `StatTable`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("row {row} has {found} fields, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },

    #[error("column {column} has {found} values, expected {expected}")]
    ColumnLength { column: String, expected: usize, found: usize },

    #[error("duplicate column name: {0}")]
    DuplicateColumn(String),
}

/// Failures turning a scraped block into a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} header lines, block only has {found}")]
    MissingHeaders { expected: usize, found: usize },

    #[error("row {row} ({team}) has {found} fields, expected {expected}")]
    RowShape { row: usize, team: String, expected: usize, found: usize },

    #[error("no <table> element in block")]
    NoTable,

    #[error(transparent)]
    Table(#[from] TableError),
}

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("team not found: {0:?}")]
    TeamNotFound(String),

    #[error("timed out after {waited:?} waiting for {what}")]
    Timeout { what: &'static str, waited: Duration },

    #[error("parse failed: {0}")]
    Parse(#[from] ParseError),

    #[error("browser session already closed")]
    SessionClosed,

    #[error("webdriver: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),

    #[error("async runtime: {0}")]
    Runtime(std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
