//! Signal detection rules for Process Behavior Charts.
//!
//! Every rule maps a measurement series to a column of the same length. A
//! point that belongs to a signal is reported with its own value; every other
//! point is [`Cell::Blank`]. All comparisons are strict: a point exactly on a
//! limit, quarter line or average never contributes to a signal.
//!
//! # References
//!
//! - Wheeler, D.J. (2000). *Understanding Variation: The Key to Managing Chaos*, 2nd ed.
//! - Western Electric (1956). *Statistical Quality Control Handbook*.

use super::cell::{blanks, Cell};

/// Minimum length of a same-side run for Rule 2.
pub const RUN_LENGTH: usize = 8;

/// Window size for Rule 3.
pub const QUARTER_WINDOW: usize = 4;

/// Points of a Rule 3 window that must lie beyond the same quarter line.
pub const QUARTER_MIN_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Position of a point relative to the central line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Above,
    Below,
    /// Exactly on the central line: belongs to no run.
    On,
}

impl Side {
    fn of(value: f64, average: f64) -> Self {
        if value > average {
            Side::Above
        } else if value < average {
            Side::Below
        } else {
            Side::On
        }
    }
}

/// Report `data[start..end]` at the same positions of `result`.
fn mark(result: &mut [Cell], data: &[f64], start: usize, end: usize) {
    for (slot, &value) in result[start..end].iter_mut().zip(&data[start..end]) {
        *slot = Cell::Number(value);
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Rule 1: a point outside the natural process limits.
///
/// Points strictly above `upper_limit` or strictly below `lower_limit` are
/// reported.
///
/// # Examples
///
/// ```
/// use process_behavior::pbc::{rule1, Cell};
///
/// let signals = rule1(&[1.0, 4.0, 1.0, 2.0], 0.0, 3.0);
/// assert_eq!(signals, vec![Cell::Blank, Cell::Number(4.0), Cell::Blank, Cell::Blank]);
/// ```
pub fn rule1(data: &[f64], lower_limit: f64, upper_limit: f64) -> Vec<Cell> {
    data.iter()
        .map(|&value| {
            if value > upper_limit || value < lower_limit {
                Cell::Number(value)
            } else {
                Cell::Blank
            }
        })
        .collect()
}

/// Rule 2: at least [`RUN_LENGTH`] consecutive points on the same side of
/// the average.
///
/// The series is split into maximal runs of points sharing a side. Every
/// point of a run at least [`RUN_LENGTH`] long is reported. A point equal to
/// the average ends the current run and never starts a signal.
pub fn rule2(data: &[f64], average: f64) -> Vec<Cell> {
    let mut result = blanks(data.len());

    let mut start = 0;
    while start < data.len() {
        let side = Side::of(data[start], average);
        let mut end = start + 1;
        while end < data.len() && Side::of(data[end], average) == side {
            end += 1;
        }
        if side != Side::On && end - start >= RUN_LENGTH {
            mark(&mut result, data, start, end);
        }
        start = end;
    }
    result
}

/// Rule 3: at least 3 out of 4 consecutive points closer to the same limit
/// than to the average.
///
/// The quarter lines sit halfway between the average and each limit. Every
/// window of [`QUARTER_WINDOW`] consecutive points (windows overlap) with at
/// least [`QUARTER_MIN_COUNT`] points strictly beyond the same quarter line
/// reports all of its points, including the one that is not beyond it.
pub fn rule3(data: &[f64], average: f64, lower_limit: f64, upper_limit: f64) -> Vec<Cell> {
    let mut result = blanks(data.len());

    let upper_quarter = (average + upper_limit) / 2.0;
    let lower_quarter = (average + lower_limit) / 2.0;

    for (start, window) in data.windows(QUARTER_WINDOW).enumerate() {
        let closer_to_upper = window.iter().filter(|&&v| v > upper_quarter).count();
        let closer_to_lower = window.iter().filter(|&&v| v < lower_quarter).count();
        if closer_to_upper >= QUARTER_MIN_COUNT || closer_to_lower >= QUARTER_MIN_COUNT {
            mark(&mut result, data, start, start + QUARTER_WINDOW);
        }
    }
    result
}

/// Moving range of the whole series: `|x_i - x_{i-1}|`, blank at index 0.
pub fn moving_range(data: &[f64]) -> Vec<Cell> {
    if data.is_empty() {
        return Vec::new();
    }
    std::iter::once(Cell::Blank)
        .chain(data.windows(2).map(|w| Cell::Number((w[1] - w[0]).abs())))
        .collect()
}

/// MR Rule 1: a moving range strictly above the upper range limit.
///
/// The point that closes the offending range is reported with its own
/// measurement. Index 0 has no moving range and is always blank.
pub fn mr_rule1(data: &[f64], mr_upper_limit: f64) -> Vec<Cell> {
    if data.is_empty() {
        return Vec::new();
    }
    std::iter::once(Cell::Blank)
        .chain(data.windows(2).map(|w| {
            if (w[1] - w[0]).abs() > mr_upper_limit {
                Cell::Number(w[1])
            } else {
                Cell::Blank
            }
        }))
        .collect()
}
