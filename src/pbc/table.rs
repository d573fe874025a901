//! Row-oriented view of a chart: a header row followed by one row per
//! measurement.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::cell::Cell;
use super::columns::{Column, ColumnSet};
use crate::error::PbcError;

/// Chart table: column headers plus one row of cells per measurement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Header row: the column names in column-set order.
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Data rows, one per measurement index.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header then rows, every cell rendered as text.
    pub fn records(&self) -> impl Iterator<Item = Vec<String>> + '_ {
        let header: Vec<String> = self.header().into_iter().map(str::to_string).collect();
        std::iter::once(header).chain(
            self.rows
                .iter()
                .map(|row| row.iter().map(Cell::to_string).collect::<Vec<_>>()),
        )
    }

    /// Rebuild the column set this table was transposed from.
    pub fn to_column_set(&self) -> ColumnSet {
        let mut set = ColumnSet::new();
        for (i, &column) in self.columns.iter().enumerate() {
            set.insert(column, self.rows.iter().map(|row| row[i]).collect());
        }
        set
    }
}

/// Serializes as the spreadsheet range: header row first, then data rows.
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len() + 1))?;
        seq.serialize_element(&self.header())?;
        for row in &self.rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Turn a column set into a table.
///
/// # Errors
///
/// [`PbcError::ColumnLengthMismatch`] if the columns do not all share the
/// length of the first one.
pub fn transpose(columns: &ColumnSet) -> Result<Table, PbcError> {
    let expected = columns.row_count();
    if let Some((column, values)) = columns.iter().find(|(_, v)| v.len() != expected) {
        return Err(PbcError::ColumnLengthMismatch {
            column: column.name(),
            expected,
            actual: values.len(),
        });
    }

    let rows = (0..expected)
        .map(|i| columns.iter().map(|(_, values)| values[i]).collect())
        .collect();

    Ok(Table {
        columns: columns.columns().collect(),
        rows,
    })
}
