//! Immutable outcome of one check execution.

use crate::check::status::CheckStatus;
use crate::check::suggestions::Suggestions;

/// The result of running (or skipping) a single check.
///
/// Produced exactly once per scheduled check, either by the check's own
/// `check()` or synthesized by the scheduler for an unmet dependency or
/// an unexpected fault. Immutable thereafter; the scheduler owns the
/// run's results and the presenter only borrows them.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// The originating check's stable name, copied so reporting survives
    /// the check object itself.
    pub name: String,
    /// Outcome status.
    pub status: CheckStatus,
    /// One-line human summary (already `<not/>`-expanded).
    pub summary: String,
    /// OS-keyed remediation table, copied from the check.
    pub suggestions: Suggestions,
}

impl CheckResult {
    /// Create a result.
    pub fn new(
        name: impl Into<String>,
        status: CheckStatus,
        summary: impl Into<String>,
        suggestions: Suggestions,
    ) -> Self {
        Self {
            name: name.into(),
            status,
            summary: summary.into(),
            suggestions,
        }
    }
}
