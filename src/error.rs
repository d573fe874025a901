//! Error type shared by every stage of the chart pipeline.
//!
//! The computation is pure: an error is never a transient condition and no
//! stage retries. Every variant aborts the whole call without a partial
//! result.

use thiserror::Error;

/// Failure of a Process Behavior Chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PbcError {
    /// The cleaned measurement series (or one of its segments) has no points.
    #[error("data must not be empty")]
    EmptyData,

    /// The column set handed to the tabulizer is ragged.
    #[error("columns must be same length: `{column}` has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Two column sets with different declared columns were merged.
    #[error("cannot merge column sets with different columns")]
    ColumnSetMismatch,

    /// A measurement is NaN or infinite.
    #[error("measurement at index {index} is not a finite number")]
    NonFiniteMeasurement { index: usize },

    /// The requested baseline holds no points.
    #[error("baseline size must be at least 1")]
    InvalidBaselineSize,

    /// A data cell holds text that does not parse as a number.
    #[error("row {row}: `{value}` is not a number")]
    InvalidCell { row: usize, value: String },
}
