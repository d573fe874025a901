//! # process-behavior
//!
//! Process Behavior Charts (XmR charts) for individual measurements: a
//! baseline average, natural process limits derived from the average moving
//! range, and the detection rules that flag signals of special causes.
//!
//! Input is a series of measurements in time order, optionally paired with
//! "Change limits" instructions that start a new process. Output is a table
//! with one row per measurement.
//!
//! ## Modules
//!
//! - [`pbc`](mod@pbc) — Limits, signal rules, process segmentation and tabulation
//! - [`sheet`] — Spreadsheet-shaped input (one-cell rows, blank rows)
//! - [`config`] — Baseline size and column layout
//! - [`error`] — Error type shared by every stage
//!
//! ## Example
//!
//! ```
//! use process_behavior::{pbc_values, Instruction, PbcConfig};
//!
//! let data = [1.0, 10.0, 100.0, 136.0];
//! let instructions = [Instruction::None, Instruction::None, Instruction::ChangeLimits];
//! let table = pbc_values(&data, &instructions, &PbcConfig::default()).unwrap();
//! assert_eq!(table.len(), 4);
//! ```

pub mod config;
pub mod error;
pub mod pbc;
pub mod sheet;

mod chart;

pub use chart::{pbc, pbc_values};
pub use config::{PbcConfig, DEFAULT_BASELINE_SIZE};
pub use error::PbcError;
pub use pbc::{Cell, Column, ColumnLayout, ColumnSet, Instruction, Table};
pub use sheet::SheetValue;
