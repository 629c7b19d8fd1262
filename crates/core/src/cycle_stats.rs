//! Pass/fail tally over a cycle's execution history.

use serde::Serialize;

use crate::outcome::{OUTCOME_FAIL, OUTCOME_PASS};

/// Summary counts for one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CycleStats {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    /// Everything that is neither a pass nor a fail (blocked, not run, ...).
    pub other: u64,
}

impl CycleStats {
    /// Percentage of passed entries, `0.0` for an empty cycle.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.passed as f64 * 100.0 / self.total as f64
    }
}

/// Count history outcomes by category.
///
/// Order-independent; an empty input yields all zeros.
pub fn aggregate<'a, I>(outcomes: I) -> CycleStats
where
    I: IntoIterator<Item = &'a str>,
{
    outcomes
        .into_iter()
        .fold(CycleStats::default(), |mut stats, outcome| {
            stats.total += 1;
            match outcome {
                OUTCOME_PASS => stats.passed += 1,
                OUTCOME_FAIL => stats.failed += 1,
                _ => stats.other += 1,
            }
            stats
        })
}
