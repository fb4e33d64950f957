// src/coerce.rs
//! Per-column typing of a freshly parsed (all-text) `StatTable`.
//!
//! Columns named in `FLOAT_COLUMNS` become `f32`; every other column is tried
//! as `i64`. One unparseable value leaves the whole column as text, and the
//! column is listed in the returned `CoercionReport`. The team-name column
//! always lands there.
//!
//! The pass is pure: it consumes the table and hands back a new one.
//! Running it again on its own output changes nothing.

use std::fmt;

use tracing::debug;

use crate::table::{Column, ColumnData, StatTable};

/// Fractional stats. Everything else is a count.
pub const FLOAT_COLUMNS: [&str; 7] = ["AVG", "OBP", "SLG", "OPS", "IP", "ERA", "WHIP"];

pub fn is_float_column(name: &str) -> bool {
    FLOAT_COLUMNS.contains(&name)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Int,
    Float,
}

impl Target {
    pub fn for_column(name: &str) -> Self {
        if is_float_column(name) { Target::Float } else { Target::Int }
    }
}

/// A column left as text, with the first value that refused to parse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fallback {
    pub column: String,
    pub target: Target,
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoercionReport {
    pub fallbacks: Vec<Fallback>,
}

impl CoercionReport {
    pub fn is_clean(&self) -> bool { self.fallbacks.is_empty() }

    pub fn columns(&self) -> Vec<&str> {
        self.fallbacks.iter().map(|f| f.column.as_str()).collect()
    }
}

impl fmt::Display for CoercionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("all columns numeric");
        }
        write!(f, "left as text: {}", self.columns().join(", "))
    }
}

pub fn coerce(table: StatTable) -> (StatTable, CoercionReport) {
    let mut report = CoercionReport::default();

    let table = table.map_columns(|col| {
        let (name, data) = col.into_parts();
        let target = Target::for_column(&name);

        let data = match (target, data) {
            (Target::Float, ColumnData::Int(v)) => ColumnData::Float(v.into_iter().map(|x| x as f32).collect()),
            (_, ColumnData::Text(values)) => match convert(target, &values) {
                Ok(typed) => typed,
                Err(value) => {
                    debug!(column = %name, ?target, %value, "Coerce: column kept as text");
                    report.fallbacks.push(Fallback { column: name.clone(), target, value });
                    ColumnData::Text(values)
                }
            },
            // Already numeric
            (_, typed) => typed,
        };
        Column::new(name, data)
    });

    (table, report)
}

/// All-or-nothing; the error carries the first offending value.
fn convert(target: Target, values: &[String]) -> Result<ColumnData, String> {
    match target {
        Target::Int => values
            .iter()
            .map(|v| v.trim().parse::<i64>().map_err(|_| v.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map(ColumnData::Int),
        Target::Float => values
            .iter()
            .map(|v| v.trim().parse::<f32>().map_err(|_| v.clone()))
            .collect::<Result<Vec<_>, _>>()
            .map(ColumnData::Float),
    }
}
