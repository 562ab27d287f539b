//! Single-pass, order-preserving check scheduler.
//!
//! Checks run strictly in declared order on one thread; side effects on
//! shared host state (reading the same config file, probing the same
//! daemon) make unordered concurrency unsafe to assume. Dependencies do
//! not reorder anything — they only gate: a check whose dependency has
//! not recorded a `Pass` result *earlier in this run* is skipped with a
//! synthesized `Fail`. The gate never looks ahead, so cyclic declarations
//! cannot loop; they just fail as unmet (see [`super::graph`] for the
//! config-time diagnostic).

use std::collections::HashMap;

use crate::check::{Check, CheckResult, CheckStatus};

/// All results of one scheduler run, in execution order.
///
/// The runner owns this; presentation and exit-code logic only borrow it.
#[derive(Debug, Default)]
pub struct RunReport {
    results: Vec<CheckResult>,
}

impl RunReport {
    /// The per-check results, one per scheduled check, in order.
    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }

    /// Aggregate severity: the maximum status over all results.
    ///
    /// An empty run is a `Pass`.
    pub fn overall(&self) -> CheckStatus {
        self.results
            .iter()
            .map(|r| r.status)
            .max()
            .unwrap_or(CheckStatus::Pass)
    }

    /// Whether the run should exit zero (no `Fail` or `Error` result).
    pub fn is_success(&self) -> bool {
        !self.overall().is_failure()
    }
}

/// Executes a list of checks with dependency gating.
#[derive(Debug, Default)]
pub struct CheckRunner;

impl CheckRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run all checks, collecting results silently.
    pub fn run(&self, checks: &[Box<dyn Check>]) -> RunReport {
        self.run_with_observer(checks, |_, _, _| {})
    }

    /// Run all checks, streaming each result to `observer` as it is
    /// recorded, with `(result, processed_so_far, total)`.
    pub fn run_with_observer<F>(&self, checks: &[Box<dyn Check>], mut observer: F) -> RunReport
    where
        F: FnMut(&CheckResult, usize, usize),
    {
        let total = checks.len();
        let mut recorded: HashMap<String, CheckStatus> = HashMap::new();
        let mut report = RunReport::default();

        for (index, check) in checks.iter().enumerate() {
            let name = check.name();
            let result = match self.unmet_dependency(check.as_ref(), &recorded) {
                Some(dep) => {
                    tracing::debug!(check = %name, dependency = %dep, "dependency gate not met");
                    CheckResult::new(
                        name.clone(),
                        CheckStatus::Fail,
                        format!("Dependency {} has not passed, skipping this check", dep),
                        check.suggestions(),
                    )
                }
                None => match check.check() {
                    Ok(result) => result,
                    Err(fault) => {
                        tracing::warn!(check = %name, error = %fault, "check raised unexpectedly");
                        CheckResult::new(
                            name.clone(),
                            CheckStatus::Error,
                            fault.to_string(),
                            check.suggestions(),
                        )
                    }
                },
            };

            recorded.insert(name, result.status);
            observer(&result, index + 1, total);
            report.results.push(result);
        }

        report
    }

    /// First declared dependency without a recorded `Pass`, if any.
    ///
    /// Strict gate: a `PassWithWarning` dependency does not unblock its
    /// dependents.
    fn unmet_dependency(
        &self,
        check: &dyn Check,
        recorded: &HashMap<String, CheckStatus>,
    ) -> Option<String> {
        check
            .depends_on()
            .into_iter()
            .find(|dep| !recorded.get(dep).copied().is_some_and(CheckStatus::is_pass))
    }
}
