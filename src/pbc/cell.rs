//! Per-point chart values.

use std::fmt;

use serde::{Serialize, Serializer};

/// One value of a chart column at one measurement index.
///
/// Signal columns are sparse: a point that does not trigger the rule is
/// [`Cell::Blank`], a point that does carries its own measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Cell {
    /// A computed statistic or a flagged measurement.
    Number(f64),
    /// No value at this index (no signal, or undefined statistic).
    #[default]
    Blank,
}

impl Cell {
    /// The numeric value, or `None` for a blank.
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            Cell::Number(v) => Some(v),
            Cell::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Cell::Blank, Cell::Number)
    }
}

/// Blank renders as empty text, matching an empty spreadsheet cell.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Blank => Ok(()),
        }
    }
}

/// Numbers serialize as numbers, blanks as the empty string.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Cell::Number(v) => serializer.serialize_f64(v),
            Cell::Blank => serializer.serialize_str(""),
        }
    }
}

/// Build a sequence of cells from plain numbers.
pub fn numbers(values: &[f64]) -> Vec<Cell> {
    values.iter().copied().map(Cell::Number).collect()
}

/// A sequence of `len` blanks.
pub fn blanks(len: usize) -> Vec<Cell> {
    vec![Cell::Blank; len]
}
