//! Top-level chart computation.

use log::debug;

use crate::config::PbcConfig;
use crate::error::PbcError;
use crate::pbc::{build_pbc, transpose, Instruction, Table};
use crate::sheet::{self, SheetValue};

/// Compute a Process Behavior Chart from spreadsheet ranges.
///
/// `data` holds one measurement per row (blank rows are dropped),
/// `instructions` holds the optional per-row instructions ("Change limits"
/// starts a new process). The result is the chart table: a header row then
/// one row per kept measurement.
///
/// # Errors
///
/// - [`PbcError::InvalidCell`] if a data cell is not a number.
/// - [`PbcError::EmptyData`] if no measurement remains once blanks are dropped.
/// - [`PbcError::NonFiniteMeasurement`] if a measurement is NaN or infinite.
/// - [`PbcError::InvalidBaselineSize`] if the configured baseline is 0.
///
/// # Examples
///
/// ```
/// use process_behavior::{pbc, PbcConfig, SheetValue};
///
/// let data: Vec<SheetValue> = [1.0, 1.0, 1.0, 1.0].into_iter().map(SheetValue::from).collect();
/// let table = pbc(&data, &[], &PbcConfig::default().with_baseline_size(4)).unwrap();
/// assert_eq!(table.header()[0], "Average");
/// assert_eq!(table.len(), 4);
/// ```
pub fn pbc(
    data: &[SheetValue],
    instructions: &[SheetValue],
    config: &PbcConfig,
) -> Result<Table, PbcError> {
    let input = sheet::prepare(data, instructions)?;
    debug!(
        "{} data row(s) prepared into {} measurement(s)",
        data.len(),
        input.data.len()
    );
    pbc_values(&input.data, &input.instructions, config)
}

/// Compute a Process Behavior Chart from clean measurements.
///
/// `instructions` is aligned by index with `data`; it may be shorter.
///
/// # Errors
///
/// - [`PbcError::EmptyData`] if `data` is empty.
/// - [`PbcError::NonFiniteMeasurement`] if a measurement is NaN or infinite.
/// - [`PbcError::InvalidBaselineSize`] if the configured baseline is 0.
pub fn pbc_values(
    data: &[f64],
    instructions: &[Instruction],
    config: &PbcConfig,
) -> Result<Table, PbcError> {
    config.validate()?;
    if data.is_empty() {
        return Err(PbcError::EmptyData);
    }
    if let Some(index) = data.iter().position(|v| !v.is_finite()) {
        return Err(PbcError::NonFiniteMeasurement { index });
    }

    let columns = build_pbc(data, instructions, config.baseline_size, config.layout)?;
    transpose(&columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pbc::{Cell, Column, ColumnLayout};

    fn values(data: &[f64]) -> Vec<SheetValue> {
        data.iter().copied().map(SheetValue::from).collect()
    }

    fn texts(data: &[&str]) -> Vec<SheetValue> {
        data.iter().copied().map(SheetValue::from).collect()
    }

    #[test]
    fn test_empty_data_fails() {
        assert_eq!(
            pbc(&[], &[], &PbcConfig::default()),
            Err(PbcError::EmptyData)
        );
        assert_eq!(
            pbc(&texts(&["", ""]), &[], &PbcConfig::default()),
            Err(PbcError::EmptyData)
        );
    }

    #[test]
    fn test_non_finite_fails() {
        assert_eq!(
            pbc_values(&[1.0, f64::NAN], &[], &PbcConfig::default()),
            Err(PbcError::NonFiniteMeasurement { index: 1 })
        );
    }

    #[test]
    fn test_zero_baseline_fails() {
        assert_eq!(
            pbc_values(&[1.0], &[], &PbcConfig::default().with_baseline_size(0)),
            Err(PbcError::InvalidBaselineSize)
        );
    }

    #[test]
    fn test_flat_series() {
        let config = PbcConfig::default().with_baseline_size(4);
        let table = pbc(&values(&[1.0; 4]), &[], &config).expect("valid input");
        assert_eq!(
            table.header(),
            vec!["Average", "Lower limit", "Upper limit", "Rule 1", "Rule 2", "Rule 3"]
        );
        for row in table.rows() {
            assert_eq!(&row[..3], &[Cell::Number(1.0); 3]);
            assert!(row[3..].iter().all(Cell::is_blank));
        }
    }

    #[test]
    fn test_blank_rows_do_not_create_rows() {
        let with_blank = pbc(&texts(&["10", "5", "0", ""]), &[], &PbcConfig::default())
            .expect("valid input");
        let without = pbc(&values(&[10.0, 5.0, 0.0]), &[], &PbcConfig::default())
            .expect("valid input");
        assert_eq!(with_blank.len(), 3);
        assert_eq!(with_blank, without);
    }

    #[test]
    fn test_moving_range_layout() {
        let config = PbcConfig::default().with_layout(ColumnLayout::MovingRange);
        let table = pbc_values(&[1.0, 3.0, 1.0, 3.0, 20.0], &[], &config).expect("valid input");
        assert_eq!(table.columns(), ColumnLayout::MovingRange.columns());
        let columns = table.to_column_set();
        // MR-bar over the whole baseline: (2 + 2 + 2 + 17) / 4.
        let mr_upper = 3.268 * 23.0 / 4.0;
        let got = columns.get(Column::MrUpperLimit).expect("column present")[0]
            .as_number()
            .expect("numeric");
        assert!((got - mr_upper).abs() < 1e-10);
        assert_eq!(
            columns.get(Column::MovingRange).expect("column present")[4],
            Cell::Number(17.0)
        );
    }
}
