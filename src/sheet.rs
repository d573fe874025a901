//! Spreadsheet-shaped input.
//!
//! A spreadsheet range arrives either as a flat list of values or as a list
//! of one-element rows. Data cells may be blank (trailing empty rows, gaps);
//! blank data rows are dropped. Instructions are not filtered: the
//! instruction on row `i` applies to the `i`-th kept measurement.

use serde::Deserialize;

use crate::error::PbcError;
use crate::pbc::Instruction;

/// One cell of a spreadsheet range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SheetValue {
    Number(f64),
    Text(String),
    /// A row of the range; only its first cell is read.
    Row(Vec<SheetValue>),
    Empty,
}

impl SheetValue {
    /// Read a data cell: `Ok(None)` for a blank.
    fn measurement(&self, row: usize) -> Result<Option<f64>, PbcError> {
        match self {
            SheetValue::Number(v) => Ok(Some(*v)),
            SheetValue::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse::<f64>()
                    .map(Some)
                    .map_err(|_| PbcError::InvalidCell {
                        row,
                        value: text.clone(),
                    })
            }
            SheetValue::Row(cells) => match cells.first() {
                Some(first) => first.measurement(row),
                None => Ok(None),
            },
            SheetValue::Empty => Ok(None),
        }
    }

    fn instruction(&self) -> Instruction {
        match self {
            SheetValue::Text(text) => Instruction::parse(text),
            SheetValue::Row(cells) => cells.first().map_or(Instruction::None, SheetValue::instruction),
            SheetValue::Number(_) | SheetValue::Empty => Instruction::None,
        }
    }
}

impl From<f64> for SheetValue {
    fn from(value: f64) -> Self {
        SheetValue::Number(value)
    }
}

impl From<&str> for SheetValue {
    fn from(value: &str) -> Self {
        SheetValue::Text(value.to_string())
    }
}

impl<T: Into<SheetValue>> From<Vec<T>> for SheetValue {
    fn from(values: Vec<T>) -> Self {
        SheetValue::Row(values.into_iter().map(Into::into).collect())
    }
}

/// Measurements and instructions ready for the chart pipeline.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PreparedInput {
    pub data: Vec<f64>,
    /// One instruction per kept measurement.
    pub instructions: Vec<Instruction>,
}

/// Flatten data cells and drop blanks.
///
/// # Errors
///
/// [`PbcError::InvalidCell`] for text that is not a number.
pub fn prepare_data(cells: &[SheetValue]) -> Result<Vec<f64>, PbcError> {
    let mut data = Vec::with_capacity(cells.len());
    for (row, cell) in cells.iter().enumerate() {
        if let Some(value) = cell.measurement(row)? {
            data.push(value);
        }
    }
    Ok(data)
}

/// Flatten instruction cells. Blank rows are kept as no-ops.
pub fn prepare_instructions(cells: &[SheetValue]) -> Vec<Instruction> {
    cells.iter().map(SheetValue::instruction).collect()
}

/// Flatten both ranges.
///
/// Instructions keep their row positions and are read by the index of the
/// kept measurement, so blank data rows shift later measurements onto
/// earlier instruction rows. Rows past the end of the data are ignored,
/// missing ones are no-ops.
///
/// # Errors
///
/// [`PbcError::InvalidCell`] for a data cell that is not a number.
pub fn prepare(data: &[SheetValue], instructions: &[SheetValue]) -> Result<PreparedInput, PbcError> {
    let raw_instructions = prepare_instructions(instructions);
    let data = prepare_data(data)?;
    let instructions = (0..data.len())
        .map(|i| raw_instructions.get(i).copied().unwrap_or_default())
        .collect();
    Ok(PreparedInput { data, instructions })
}
