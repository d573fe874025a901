//! Process Behavior Charts (XmR charts with natural process limits).
//!
//! A chart is computed per process: the first measurements of the process
//! form its baseline, the baseline gives the average and natural process
//! limits, and the signal rules scan every point of the process against
//! them. "Change limits" instructions split a series into several processes
//! whose results are concatenated.
//!
//! # Pipeline
//!
//! - [`segment`] — split the series at reset instructions
//! - [`compute_one_process`] — baseline, limits and rule columns of one process
//! - [`merge`] — concatenate per-process column sets
//! - [`transpose`] — column set to header + rows table
//!
//! # Signal Rules
//!
//! - [`rule1`] — point outside the natural process limits
//! - [`rule2`] — 8 or more consecutive points on one side of the average
//! - [`rule3`] — 3 out of 4 consecutive points closer to a limit than to the average
//! - [`mr_rule1`] — moving range above its upper range limit
//!
//! # References
//!
//! - Wheeler, D.J. (2000). *Understanding Variation: The Key to Managing Chaos*, 2nd ed.
//! - Montgomery, D.C. (2019). *Introduction to Statistical Quality Control*, 8th ed.

mod cell;
mod columns;
mod limits;
mod rules;
mod segment;
mod table;

pub use cell::{blanks, numbers, Cell};
pub use columns::{merge, Column, ColumnLayout, ColumnSet};
pub use limits::{average, compute_limits, compute_one_process, NaturalProcessLimits, D2_MR, D4_MR};
pub use rules::{
    moving_range, mr_rule1, rule1, rule2, rule3, QUARTER_MIN_COUNT, QUARTER_WINDOW, RUN_LENGTH,
};
pub use segment::{build_pbc, segment, Instruction, CHANGE_LIMITS};
pub use table::{transpose, Table};
