//! Splitting a series into processes and assembling the full chart.
//!
//! A "Change limits" instruction starts a new process at its row: the new
//! process gets its own baseline and limits. Computing a series with such a
//! reset is equivalent to computing each process on its own and
//! concatenating the results.

use log::debug;

use super::columns::{ColumnLayout, ColumnSet};
use super::limits::compute_one_process;
use crate::error::PbcError;

/// Instruction text that starts a new process.
pub const CHANGE_LIMITS: &str = "Change limits";

/// Per-row instruction attached to a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Instruction {
    /// Keep the current process.
    #[default]
    None,
    /// Start a new process at this row.
    ChangeLimits,
}

impl Instruction {
    /// Parse instruction text. Anything but [`CHANGE_LIMITS`] is a no-op.
    pub fn parse(text: &str) -> Self {
        if text == CHANGE_LIMITS {
            Instruction::ChangeLimits
        } else {
            Instruction::None
        }
    }
}

/// Split `data` into contiguous processes.
///
/// A [`Instruction::ChangeLimits`] at index `i > 0` closes the current process
/// before `data[i]`. A reset at index 0 has no effect, and indices past the
/// end of `instructions` are no-ops. The result always holds at least one
/// process; processes are non-empty unless `data` itself is empty.
pub fn segment<'a>(data: &'a [f64], instructions: &[Instruction]) -> Vec<&'a [f64]> {
    let mut processes = Vec::new();
    let mut start = 0;
    for i in 1..data.len() {
        if instructions.get(i) == Some(&Instruction::ChangeLimits) {
            processes.push(&data[start..i]);
            start = i;
        }
    }
    processes.push(&data[start..]);
    processes
}

/// Compute every process of `data` and merge them into one column set.
///
/// # Errors
///
/// - [`PbcError::EmptyData`] if `data` is empty.
/// - [`PbcError::InvalidBaselineSize`] if `baseline_size` is 0.
pub fn build_pbc(
    data: &[f64],
    instructions: &[Instruction],
    baseline_size: usize,
    layout: ColumnLayout,
) -> Result<ColumnSet, PbcError> {
    let processes = segment(data, instructions);
    debug!("{} point(s) split into {} process(es)", data.len(), processes.len());

    processes
        .into_iter()
        .map(|process| compute_one_process(process, baseline_size, layout))
        .try_fold(ColumnSet::empty(layout), |merged, process| merged.merge(process?))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn processes_concatenate_to_input(
            data in proptest::collection::vec(-1e3_f64..1e3, 0..=40),
            resets in proptest::collection::vec(any::<bool>(), 0..=45),
        ) {
            let instructions: Vec<Instruction> = resets
                .iter()
                .map(|&r| if r { Instruction::ChangeLimits } else { Instruction::None })
                .collect();
            let processes = segment(&data, &instructions);
            prop_assert!(!processes.is_empty());
            if !data.is_empty() {
                prop_assert!(processes.iter().all(|p| !p.is_empty()));
            }
            let joined: Vec<f64> = processes.concat();
            prop_assert_eq!(joined, data);
        }

        #[test]
        fn merged_length_equals_input(
            data in proptest::collection::vec(-1e3_f64..1e3, 1..=40),
            resets in proptest::collection::vec(any::<bool>(), 0..=40),
            baseline_size in 1_usize..=12,
        ) {
            let instructions: Vec<Instruction> = resets
                .iter()
                .map(|&r| if r { Instruction::ChangeLimits } else { Instruction::None })
                .collect();
            let columns = build_pbc(&data, &instructions, baseline_size, ColumnLayout::MovingRange)
                .expect("non-empty data");
            for (_, values) in columns.iter() {
                prop_assert_eq!(values.len(), data.len());
            }
        }
    }
}
