//! Column-oriented chart results and the process merger.
//!
//! A [`ColumnSet`] maps each declared [`Column`] to one [`Cell`] per
//! measurement. Columns keep their insertion order, which is the order the
//! tabulizer emits them in.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use crate::error::PbcError;

/// The recognized chart columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Baseline average, constant over a segment.
    Average,
    /// Lower natural process limit.
    LowerLimit,
    /// Upper natural process limit.
    UpperLimit,
    /// Point outside the natural process limits.
    Rule1,
    /// Run of at least 8 points on the same side of the average.
    Rule2,
    /// 3 out of 4 points closer to a limit than to the average.
    Rule3,
    /// Absolute difference with the previous point.
    MovingRange,
    /// Upper range limit for the moving range.
    MrUpperLimit,
    /// Moving range above its upper range limit.
    MrRule1,
}

impl Column {
    /// Header text of the column in the output table.
    pub fn name(&self) -> &'static str {
        match self {
            Column::Average => "Average",
            Column::LowerLimit => "Lower limit",
            Column::UpperLimit => "Upper limit",
            Column::Rule1 => "Rule 1",
            Column::Rule2 => "Rule 2",
            Column::Rule3 => "Rule 3",
            Column::MovingRange => "Moving range",
            Column::MrUpperLimit => "MR Upper limit",
            Column::MrRule1 => "MR Rule 1",
        }
    }
}

const CLASSIC_COLUMNS: [Column; 6] = [
    Column::Average,
    Column::LowerLimit,
    Column::UpperLimit,
    Column::Rule1,
    Column::Rule2,
    Column::Rule3,
];

const MOVING_RANGE_COLUMNS: [Column; 9] = [
    Column::Average,
    Column::LowerLimit,
    Column::UpperLimit,
    Column::Rule1,
    Column::Rule2,
    Column::Rule3,
    Column::MovingRange,
    Column::MrUpperLimit,
    Column::MrRule1,
];

/// Which set of columns a chart produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    /// Average, limits and the three signal rules.
    #[default]
    Classic,
    /// [`ColumnLayout::Classic`] plus the moving range chart columns.
    MovingRange,
}

impl ColumnLayout {
    /// Columns of this layout, in output order.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            ColumnLayout::Classic => &CLASSIC_COLUMNS,
            ColumnLayout::MovingRange => &MOVING_RANGE_COLUMNS,
        }
    }
}

/// Ordered mapping from column to per-point values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnSet {
    columns: Vec<(Column, Vec<Cell>)>,
}

impl ColumnSet {
    /// A column set without any column.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every column of `layout`, each with no value yet.
    ///
    /// This is the seed of the merge fold.
    pub fn empty(layout: ColumnLayout) -> Self {
        Self {
            columns: layout
                .columns()
                .iter()
                .map(|&column| (column, Vec::new()))
                .collect(),
        }
    }

    /// Set the values of `column`, appending it if it is not present yet.
    pub fn insert(&mut self, column: Column, values: Vec<Cell>) {
        match self.columns.iter_mut().find(|(c, _)| *c == column) {
            Some((_, existing)) => *existing = values,
            None => self.columns.push((column, values)),
        }
    }

    /// Builder form of [`ColumnSet::insert`].
    pub fn with(mut self, column: Column, values: Vec<Cell>) -> Self {
        self.insert(column, values);
        self
    }

    pub fn get(&self, column: Column) -> Option<&[Cell]> {
        self.columns
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, values)| values.as_slice())
    }

    /// Declared columns, in order.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.iter().map(|(c, _)| *c)
    }

    /// `(column, values)` pairs, in order.
    pub fn iter(&self) -> impl Iterator<Item = (Column, &[Cell])> + '_ {
        self.columns.iter().map(|(c, v)| (*c, v.as_slice()))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Length of the first column, or 0 without columns.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |(_, v)| v.len())
    }

    /// Concatenate `other` after `self`, column by column.
    ///
    /// Both sets must declare the same columns. The result keeps the column
    /// order of `self`.
    ///
    /// # Errors
    ///
    /// [`PbcError::ColumnSetMismatch`] if the declared columns differ.
    pub fn merge(self, other: ColumnSet) -> Result<ColumnSet, PbcError> {
        if self.columns.len() != other.columns.len() {
            return Err(PbcError::ColumnSetMismatch);
        }
        let mut other = other;
        let mut merged = Vec::with_capacity(self.columns.len());
        for (column, mut values) in self.columns {
            let tail = other
                .columns
                .iter_mut()
                .find(|(c, _)| *c == column)
                .map(|(_, v)| std::mem::take(v))
                .ok_or(PbcError::ColumnSetMismatch)?;
            values.extend(tail);
            merged.push((column, values));
        }
        Ok(ColumnSet { columns: merged })
    }
}

/// Merge two per-process column sets. See [`ColumnSet::merge`].
pub fn merge(first: ColumnSet, second: ColumnSet) -> Result<ColumnSet, PbcError> {
    first.merge(second)
}
