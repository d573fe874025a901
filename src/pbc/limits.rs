//! Baseline statistics and natural process limits for one process.
//!
//! # Algorithm
//!
//! 1. The baseline is the first `min(baseline_size, n)` measurements.
//! 2. Baseline moving ranges: MR_i = |x_i - x_{i-1}| for consecutive baseline points.
//! 3. Average X-bar and average moving range MR-bar over the baseline.
//! 4. Natural process limits: X-bar +/- 3 * MR-bar / d2, with d2 = 1.128.
//! 5. Upper range limit: D4 * MR-bar, with D4 = 3.268.
//!
//! A baseline of a single point has no moving range: MR-bar is 0 and both
//! limits collapse onto the average.
//!
//! # References
//!
//! - Wheeler, D.J. (2000). *Understanding Variation: The Key to Managing Chaos*, 2nd ed.
//! - ASTM E2587 — Standard Practice for Use of Control Charts

use log::{debug, trace};

use super::cell::Cell;
use super::columns::{Column, ColumnLayout, ColumnSet};
use super::rules::{moving_range, mr_rule1, rule1, rule2, rule3};
use crate::error::PbcError;

/// d2 bias correction factor for moving ranges of two points.
pub const D2_MR: f64 = 1.128;

/// D4 factor for the upper range limit of two-point moving ranges.
pub const D4_MR: f64 = 3.268;

/// Arithmetic mean, defined as 0 for an empty slice.
pub fn average(data: &[f64]) -> f64 {
    u_numflow::stats::mean(data).unwrap_or(0.0)
}

/// Central line and limits derived from a baseline.
///
/// # Invariants
///
/// - `lower_limit <= average <= upper_limit`
/// - `average_moving_range >= 0` and `mr_upper_limit >= 0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaturalProcessLimits {
    /// Mean of the baseline measurements.
    pub average: f64,
    /// Mean of the baseline moving ranges (0 for a one-point baseline).
    pub average_moving_range: f64,
    /// Lower natural process limit.
    pub lower_limit: f64,
    /// Upper natural process limit.
    pub upper_limit: f64,
    /// Upper range limit for the moving range chart.
    pub mr_upper_limit: f64,
}

impl NaturalProcessLimits {
    /// Compute limits from baseline measurements.
    ///
    /// # Errors
    ///
    /// [`PbcError::EmptyData`] if `baseline` is empty.
    pub fn from_baseline(baseline: &[f64]) -> Result<Self, PbcError> {
        if baseline.is_empty() {
            return Err(PbcError::EmptyData);
        }

        let moving_ranges: Vec<f64> = baseline.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
        let average_moving_range = average(&moving_ranges);
        let process_average = average(baseline);
        let half_width = 3.0 * average_moving_range / D2_MR;

        Ok(Self {
            average: process_average,
            average_moving_range,
            lower_limit: process_average - half_width,
            upper_limit: process_average + half_width,
            mr_upper_limit: D4_MR * average_moving_range,
        })
    }
}

/// Compute the limits of a segment from its first `baseline_size` points.
///
/// # Errors
///
/// - [`PbcError::EmptyData`] if `segment` is empty.
/// - [`PbcError::InvalidBaselineSize`] if `baseline_size` is 0.
pub fn compute_limits(segment: &[f64], baseline_size: usize) -> Result<NaturalProcessLimits, PbcError> {
    if segment.is_empty() {
        return Err(PbcError::EmptyData);
    }
    if baseline_size == 0 {
        return Err(PbcError::InvalidBaselineSize);
    }
    let baseline = &segment[..baseline_size.min(segment.len())];
    NaturalProcessLimits::from_baseline(baseline)
}

/// Compute every column of `layout` for one process.
///
/// Limits come from the baseline only; the rules run over the whole
/// segment. Every returned column has `segment.len()` values.
///
/// # Errors
///
/// - [`PbcError::EmptyData`] if `segment` is empty.
/// - [`PbcError::InvalidBaselineSize`] if `baseline_size` is 0.
///
/// # Examples
///
/// ```
/// use process_behavior::pbc::{compute_one_process, Cell, Column, ColumnLayout};
///
/// let columns = compute_one_process(&[1.0, 3.0], 2, ColumnLayout::Classic).unwrap();
/// assert_eq!(columns.get(Column::Average), Some(&[Cell::Number(2.0), Cell::Number(2.0)][..]));
/// ```
pub fn compute_one_process(
    segment: &[f64],
    baseline_size: usize,
    layout: ColumnLayout,
) -> Result<ColumnSet, PbcError> {
    let limits = compute_limits(segment, baseline_size)?;
    let n = segment.len();

    debug!(
        "process of {} points: baseline {}, average {}, limits [{}, {}]",
        n,
        baseline_size.min(n),
        limits.average,
        limits.lower_limit,
        limits.upper_limit
    );

    let constant = |value: f64| vec![Cell::Number(value); n];

    let mut columns = ColumnSet::empty(layout);
    for &column in layout.columns() {
        let values = match column {
            Column::Average => constant(limits.average),
            Column::LowerLimit => constant(limits.lower_limit),
            Column::UpperLimit => constant(limits.upper_limit),
            Column::Rule1 => rule1(segment, limits.lower_limit, limits.upper_limit),
            Column::Rule2 => rule2(segment, limits.average),
            Column::Rule3 => rule3(segment, limits.average, limits.lower_limit, limits.upper_limit),
            Column::MovingRange => moving_range(segment),
            Column::MrUpperLimit => constant(limits.mr_upper_limit),
            Column::MrRule1 => mr_rule1(segment, limits.mr_upper_limit),
        };
        trace!(
            "{}: {} signal(s)",
            column.name(),
            values.iter().filter(|c| !c.is_blank()).count()
        );
        columns.insert(column, values);
    }

    debug_assert!(columns.iter().all(|(_, v)| v.len() == n));
    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(columns: &ColumnSet, column: Column) -> Vec<f64> {
        columns
            .get(column)
            .expect("column present")
            .iter()
            .map(|c| c.as_number().expect("numeric cell"))
            .collect()
    }

    fn assert_all_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-10, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_average_of_empty_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn test_average() {
        assert!((average(&[1.0, 2.0, 3.0, 6.0]) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_baseline_average() {
        let cases: [(&[f64], usize, &[f64]); 7] = [
            (&[1.0], 1, &[1.0]),
            (&[1.0, 1.0], 2, &[1.0, 1.0]),
            (&[1.0, -1.0], 2, &[0.0, 0.0]),
            (&[1.0, 3.0], 2, &[2.0, 2.0]),
            (&[1.0, 3.0], 1, &[1.0, 1.0]),
            (&[1.0, 3.0], 3, &[2.0, 2.0]),
            (&[1.0, 3.0, 100.0], 2, &[2.0, 2.0, 2.0]),
        ];
        for (data, baseline_size, expected) in cases {
            let columns = compute_one_process(data, baseline_size, ColumnLayout::Classic)
                .expect("non-empty data");
            assert_all_close(&column(&columns, Column::Average), expected);
        }
    }

    #[test]
    fn test_lower_limit() {
        let cases: [(&[f64], usize, f64); 6] = [
            (&[1.0, 1.0, 1.0, 1.0], 4, 1.0),
            (&[1.0, 0.0, -1.0], 3, -2.659574468085107),
            (&[1.0, 2.0, 1.0, 2.0], 4, -1.1595744680851068),
            (&[0.0, 2.0, 1.0, 2.0], 1, 0.0),
            (&[1.0, 1.0, 2.0, 2.0], 2, 1.0),
            (&[-1.0, 1.0, 2.0, 2.0], 2, -5.319148936170214),
        ];
        for (data, baseline_size, expected) in cases {
            let columns = compute_one_process(data, baseline_size, ColumnLayout::Classic)
                .expect("non-empty data");
            assert_all_close(&column(&columns, Column::LowerLimit), &vec![expected; data.len()]);
        }
    }

    #[test]
    fn test_upper_limit() {
        let cases: [(&[f64], usize, f64); 6] = [
            (&[1.0, 1.0, 1.0, 1.0], 4, 1.0),
            (&[1.0, 0.0, -1.0], 3, 2.659574468085107),
            (&[1.0, 2.0, 1.0, 2.0], 4, 4.159574468085107),
            (&[0.0, 2.0, 1.0, 2.0], 1, 0.0),
            (&[1.0, 1.0, 2.0, 2.0], 2, 1.0),
            (&[-1.0, 1.0, 2.0, 2.0], 2, 5.319148936170214),
        ];
        for (data, baseline_size, expected) in cases {
            let columns = compute_one_process(data, baseline_size, ColumnLayout::Classic)
                .expect("non-empty data");
            assert_all_close(&column(&columns, Column::UpperLimit), &vec![expected; data.len()]);
        }
    }

    #[test]
    fn test_single_point_baseline_collapses_limits() {
        let limits = compute_limits(&[5.0, 9.0, 1.0], 1).expect("non-empty data");
        assert_eq!(limits.average, 5.0);
        assert_eq!(limits.average_moving_range, 0.0);
        assert_eq!(limits.lower_limit, 5.0);
        assert_eq!(limits.upper_limit, 5.0);
        assert_eq!(limits.mr_upper_limit, 0.0);
    }

    #[test]
    fn test_mr_upper_limit() {
        // Moving ranges 2, 2, 2 -> MR-bar = 2.
        let limits = compute_limits(&[1.0, 3.0, 1.0, 3.0], 4).expect("non-empty data");
        assert!((limits.average_moving_range - 2.0).abs() < 1e-12);
        assert!((limits.mr_upper_limit - 6.536).abs() < 1e-12);
    }

    #[test]
    fn test_rules_use_whole_segment() {
        // Baseline [1, 2] gives limits 1.5 +/- 2.66; 10 lies far outside.
        let columns = compute_one_process(&[1.0, 2.0, 1.0, 10.0], 2, ColumnLayout::Classic)
            .expect("non-empty data");
        assert_eq!(
            columns.get(Column::Rule1),
            Some(&[Cell::Blank, Cell::Blank, Cell::Blank, Cell::Number(10.0)][..])
        );
    }

    #[test]
    fn test_flat_series_has_no_signal() {
        let columns = compute_one_process(&[1.0; 4], 4, ColumnLayout::MovingRange)
            .expect("non-empty data");
        for c in [Column::Average, Column::LowerLimit, Column::UpperLimit] {
            assert_eq!(column(&columns, c), vec![1.0; 4]);
        }
        for c in [Column::Rule1, Column::Rule2, Column::Rule3, Column::MrRule1] {
            assert!(columns.get(c).expect("column present").iter().all(Cell::is_blank));
        }
        assert_eq!(
            columns.get(Column::MovingRange),
            Some(
                &[
                    Cell::Blank,
                    Cell::Number(0.0),
                    Cell::Number(0.0),
                    Cell::Number(0.0)
                ][..]
            )
        );
    }

    #[test]
    fn test_layout_controls_columns() {
        let classic = compute_one_process(&[1.0, 2.0], 10, ColumnLayout::Classic)
            .expect("non-empty data");
        assert_eq!(classic.column_count(), 6);
        assert!(classic.get(Column::MovingRange).is_none());

        let extended = compute_one_process(&[1.0, 2.0], 10, ColumnLayout::MovingRange)
            .expect("non-empty data");
        let order: Vec<Column> = extended.columns().collect();
        assert_eq!(order, ColumnLayout::MovingRange.columns());
    }

    #[test]
    fn test_empty_segment_fails() {
        assert_eq!(
            compute_one_process(&[], 10, ColumnLayout::Classic),
            Err(PbcError::EmptyData)
        );
    }

    #[test]
    fn test_zero_baseline_fails() {
        assert_eq!(compute_limits(&[1.0], 0), Err(PbcError::InvalidBaselineSize));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn limits_surround_average(
            data in proptest::collection::vec(-1e3_f64..1e3, 1..=30),
            baseline_size in 1_usize..=40,
        ) {
            let limits = compute_limits(&data, baseline_size).expect("non-empty data");
            prop_assert!(limits.lower_limit <= limits.average);
            prop_assert!(limits.average <= limits.upper_limit);
            prop_assert!(limits.mr_upper_limit >= 0.0);
        }

        #[test]
        fn columns_match_segment_length(
            data in proptest::collection::vec(-1e3_f64..1e3, 1..=30),
            baseline_size in 1_usize..=40,
        ) {
            let columns = compute_one_process(&data, baseline_size, ColumnLayout::MovingRange)
                .expect("non-empty data");
            for (_, values) in columns.iter() {
                prop_assert_eq!(values.len(), data.len());
            }
        }
    }
}
