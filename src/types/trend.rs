//! Week-over-week trend deltas

use serde::{Deserialize, Serialize};

/// Comparison of this week's mean against last week's for one composite score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendDelta {
    /// Mean of this week's values
    pub current: f64,
    /// Mean of the prior week's values
    pub previous: f64,
    /// `current - previous`, rounded
    pub diff: i32,
    /// True only if the prior week had at least one data point
    pub has_previous: bool,
}

impl TrendDelta {
    /// Trend with a prior-week baseline
    pub fn new(current: f64, previous: f64) -> Self {
        Self {
            current,
            previous,
            diff: (current - previous).round() as i32,
            has_previous: true,
        }
    }

    /// Trend without a baseline. `diff` is meaningless here.
    pub fn without_baseline(current: f64) -> Self {
        Self {
            current,
            previous: 0.0,
            diff: 0,
            has_previous: false,
        }
    }

    /// Change if a baseline exists
    pub fn change(&self) -> Option<i32> {
        self.has_previous.then_some(self.diff)
    }
}
