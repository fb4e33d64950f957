// src/table.rs
//! `StatTable`: column-major, typed view of one scraped stats section.
//!
//! Invariants:
//! - every column holds exactly `n_rows()` values;
//! - column names are unique and fixed at construction.
//!
//! Tables are built as all-text from scraped rows (`from_rows`) and then
//! retyped per column by `coerce`.

use std::collections::HashSet;
use std::fmt;

use crate::error::TableError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    Int,
    Float,
    Text,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Int(Vec<i64>),
    Float(Vec<f32>),
    Text(Vec<String>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(v) => v.len(),
            ColumnData::Float(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnData::Int(_) => ColumnKind::Int,
            ColumnData::Float(_) => ColumnKind::Float,
            ColumnData::Text(_) => ColumnKind::Text,
        }
    }

    pub fn get(&self, i: usize) -> Option<Cell<'_>> {
        match self {
            ColumnData::Int(v) => v.get(i).map(|&x| Cell::Int(x)),
            ColumnData::Float(v) => v.get(i).map(|&x| Cell::Float(x)),
            ColumnData::Text(v) => v.get(i).map(|x| Cell::Text(x.as_str())),
        }
    }
}

/// One borrowed value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Cell<'a> {
    Int(i64),
    Float(f32),
    Text(&'a str),
}

impl<'a> Cell<'a> {
    pub fn as_i64(&self) -> Option<i64> {
        match *self { Cell::Int(x) => Some(x), _ => None }
    }

    /// Ints widen; text does not parse.
    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Cell::Float(x) => Some(x),
            Cell::Int(x) => Some(x as f32),
            Cell::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self { Cell::Text(s) => Some(s), _ => None }
    }
}

impl fmt::Display for Cell<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(x) => write!(f, "{x}"),
            Cell::Float(x) => write!(f, "{x:.3}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Column {
    name: String,
    data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self { name: name.into(), data }
    }
    pub fn name(&self) -> &str { &self.name }
    pub fn data(&self) -> &ColumnData { &self.data }
    pub fn kind(&self) -> ColumnKind { self.data.kind() }
    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }
    pub fn into_parts(self) -> (String, ColumnData) { (self.name, self.data) }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct StatTable {
    columns: Vec<Column>,
    rows: usize,
}

impl StatTable {
    /// Build an all-text table from header names and row-major fields.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        check_unique(headers.iter().map(String::as_str))?;

        let n_rows = rows.len();
        let mut cols: Vec<Vec<String>> = headers.iter().map(|_| Vec::with_capacity(n_rows)).collect();

        for (ri, row) in rows.into_iter().enumerate() {
            if row.len() != headers.len() {
                return Err(TableError::RowLength { row: ri, expected: headers.len(), found: row.len() });
            }
            for (ci, field) in row.into_iter().enumerate() {
                cols[ci].push(field);
            }
        }

        let columns = headers
            .into_iter()
            .zip(cols)
            .map(|(name, values)| Column::new(name, ColumnData::Text(values)))
            .collect();

        Ok(Self { columns, rows: n_rows })
    }

    /// Build from already-typed columns; lengths must agree.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        check_unique(columns.iter().map(Column::name))?;

        let rows = columns.first().map(Column::len).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.len() != rows) {
            return Err(TableError::ColumnLength {
                column: s!(bad.name()),
                expected: rows,
                found: bad.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    pub fn n_rows(&self) -> usize { self.rows }
    pub fn n_cols(&self) -> usize { self.columns.len() }
    pub fn is_empty(&self) -> bool { self.rows == 0 }

    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn columns(&self) -> &[Column] { &self.columns }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn cell(&self, row: usize, column: &str) -> Option<Cell<'_>> {
        self.column(column)?.data.get(row)
    }

    pub fn row(&self, i: usize) -> Option<Vec<Cell<'_>>> {
        if i >= self.rows {
            return None;
        }
        self.columns.iter().map(|c| c.data.get(i)).collect()
    }

    pub fn into_columns(self) -> Vec<Column> { self.columns }

    /// Rebuild column by column. `f` must keep each column's name and length.
    pub(crate) fn map_columns(self, f: impl FnMut(Column) -> Column) -> Self {
        let rows = self.rows;
        let columns: Vec<Column> = self.columns.into_iter().map(f).collect();
        debug_assert!(columns.iter().all(|c| c.len() == rows));
        Self { columns, rows }
    }

    /// Typed copy of this table; see `coerce`.
    pub fn coerced(self) -> (Self, crate::coerce::CoercionReport) {
        crate::coerce::coerce(self)
    }
}

fn check_unique<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), TableError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(TableError::DuplicateColumn(s!(name)));
        }
    }
    Ok(())
}

/// Innings pitched read as whole.thirds, so one decimal.
pub fn format_cell(column: &str, cell: Cell<'_>) -> String {
    match cell {
        Cell::Float(x) if column == "IP" => format!("{x:.1}"),
        other => other.to_string(),
    }
}

impl fmt::Display for StatTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|c| (0..self.rows).filter_map(|i| c.data.get(i)).map(|cell| format_cell(&c.name, cell)).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&rendered)
            .map(|(c, cells)| {
                cells.iter().map(|s| s.chars().count()).chain([c.name.chars().count()]).max().unwrap_or(0)
            })
            .collect();

        let line = |cells: Vec<&str>| -> String {
            let mut out = s!();
            for (i, (cell, w)) in cells.iter().zip(&widths).enumerate() {
                if i > 0 { out.push_str("  "); }
                out.push_str(cell);
                out.extend(std::iter::repeat_n(' ', w.saturating_sub(cell.chars().count())));
            }
            s!(out.trim_end())
        };

        writeln!(f, "{}", line(self.headers()))?;
        if self.rows == 0 {
            return writeln!(f, "(no rows)");
        }
        for r in 0..self.rows {
            writeln!(f, "{}", line(rendered.iter().map(|col| col[r].as_str()).collect()))?;
        }
        Ok(())
    }
}
