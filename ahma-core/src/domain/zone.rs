//! Trend zones — contiguous runs of one bias, for chart shading.

use super::point::Bias;
use serde::{Deserialize, Serialize};

/// Maximal contiguous run of warm bars sharing one bias.
///
/// Zones are ordered by `start_index`, never overlap, and always span at
/// least two bars (single-bar runs are not emitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendZone {
    pub start_index: usize,
    pub end_index: usize,
    pub start_label: String,
    pub end_label: String,
    pub bias: Bias,
}

impl TrendZone {
    /// Number of bars covered, inclusive of both ends.
    pub fn span(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }
}
