//! Chart computation settings.

use serde::{Deserialize, Serialize};

use crate::error::PbcError;
use crate::pbc::ColumnLayout;

/// Number of points in a baseline when none is requested.
pub const DEFAULT_BASELINE_SIZE: usize = 10;

/// Settings of one chart computation.
///
/// # Examples
///
/// ```
/// use process_behavior::{ColumnLayout, PbcConfig};
///
/// let config = PbcConfig::default()
///     .with_baseline_size(20)
///     .with_layout(ColumnLayout::MovingRange);
/// assert_eq!(config.baseline_size, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PbcConfig {
    /// Points of each process used to compute its average and limits.
    /// Processes shorter than this use all of their points.
    pub baseline_size: usize,
    /// Columns to produce.
    pub layout: ColumnLayout,
}

impl Default for PbcConfig {
    fn default() -> Self {
        Self {
            baseline_size: DEFAULT_BASELINE_SIZE,
            layout: ColumnLayout::Classic,
        }
    }
}

impl PbcConfig {
    pub fn with_baseline_size(mut self, baseline_size: usize) -> Self {
        self.baseline_size = baseline_size;
        self
    }

    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    /// # Errors
    ///
    /// [`PbcError::InvalidBaselineSize`] if `baseline_size` is 0.
    pub fn validate(&self) -> Result<(), PbcError> {
        if self.baseline_size == 0 {
            return Err(PbcError::InvalidBaselineSize);
        }
        Ok(())
    }
}
