//! Check outcome status.

use std::fmt;

/// The outcome of a single check.
///
/// Variant order defines severity: `Pass < PassWithWarning < Fail < Error`,
/// so aggregating a run is a plain `max()` over its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckStatus {
    /// The inspected condition is met.
    Pass,
    /// Acceptable, but below a recommended threshold.
    PassWithWarning,
    /// The inspected condition is not met (tool missing, version too low,
    /// unmet dependency).
    Fail,
    /// The check itself could not run (unexpected fault caught at the
    /// scheduler boundary).
    Error,
}

impl CheckStatus {
    /// Whether this status satisfies a dependency gate.
    ///
    /// Strictly `Pass` only: a warning does not unblock dependents.
    pub fn is_pass(self) -> bool {
        matches!(self, CheckStatus::Pass)
    }

    /// Whether this status makes the overall run fail.
    pub fn is_failure(self) -> bool {
        matches!(self, CheckStatus::Fail | CheckStatus::Error)
    }
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::Pass => "pass",
            CheckStatus::PassWithWarning => "warning",
            CheckStatus::Fail => "fail",
            CheckStatus::Error => "error",
        };
        write!(f, "{}", label)
    }
}
