//! Well-known test outcome values.
//!
//! These must match the values stored in the `cycle_history.outcome` column.
//! Any other stored value is tallied as "other" by the stats aggregator.

/// The case passed in this cycle.
pub const OUTCOME_PASS: &str = "pass";

/// The case failed in this cycle.
pub const OUTCOME_FAIL: &str = "fail";

/// The case was blocked by an external dependency.
pub const OUTCOME_BLOCKED: &str = "blocked";

/// The case was not run in this cycle.
pub const OUTCOME_NOT_RUN: &str = "not_run";

/// Outcome vocabulary clients are expected to send. Other values are still
/// stored, and tallied as "other".
pub const KNOWN_OUTCOMES: [&str; 4] = [OUTCOME_PASS, OUTCOME_FAIL, OUTCOME_BLOCKED, OUTCOME_NOT_RUN];

/// Whether a normalised (trimmed, lowercase) outcome is in [`KNOWN_OUTCOMES`].
pub fn is_known(outcome: &str) -> bool {
    KNOWN_OUTCOMES.contains(&outcome)
}
