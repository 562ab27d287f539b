//! The check contract.
//!
//! Every environment inspection is one implementation of the [`Check`]
//! trait: identity, optional dependency list, an inspection operation,
//! and an OS-keyed suggestion table. Concrete checks are pure
//! data-plus-closure pairings (config in, [`CheckResult`] out); there is
//! no shared mutable state between them.

pub mod result;
pub mod status;
pub mod suggestions;

pub use result::CheckResult;
pub use status::CheckStatus;
pub use suggestions::Suggestions;

use semver::{Version, VersionReq};

use crate::error::Result;
use crate::text::expand_not;

/// A single environment inspection unit.
///
/// The provided methods are the result constructors every concrete check
/// uses; they stamp the check's name and suggestion table onto the
/// produced [`CheckResult`].
///
/// Identity is the stable dotted `name()` string. Dependencies reference
/// the concrete configured name of the prerequisite check, so
/// parametrized checks (which embed their parameter in the name) must be
/// referenced by that full name.
pub trait Check {
    /// Stable identifier, unique within a run. Dotted-path convention,
    /// e.g. `"kubectl.installed"`.
    fn name(&self) -> String;

    /// Names of checks that must have passed before this one may run.
    fn depends_on(&self) -> Vec<String> {
        Vec::new()
    }

    /// OS-keyed remediation table shown when this check does not pass.
    fn suggestions(&self) -> Suggestions {
        Suggestions::new()
    }

    /// Perform the inspection.
    ///
    /// An expected negative outcome is an `Ok` result with `Fail` status;
    /// `Err` is the unexpected-fault channel and is converted to an
    /// `Error` result at the scheduler boundary.
    fn check(&self) -> Result<CheckResult>;

    /// Build a result with an explicit status.
    fn result(&self, status: CheckStatus, summary: &str) -> CheckResult {
        CheckResult::new(self.name(), status, summary, self.suggestions())
    }

    /// The inspected condition is met.
    fn passed(&self, summary: &str) -> CheckResult {
        self.result(CheckStatus::Pass, summary)
    }

    /// The inspected condition is not met.
    fn failed(&self, summary: &str) -> CheckResult {
        self.result(CheckStatus::Fail, summary)
    }

    /// Acceptable, but below a recommended threshold.
    fn warned(&self, summary: &str) -> CheckResult {
        self.result(CheckStatus::PassWithWarning, summary)
    }

    /// Map a boolean to Pass/Fail, expanding the `<not/>` placeholder in
    /// the summary template accordingly.
    fn verify(&self, condition: bool, template: &str) -> CheckResult {
        let summary = expand_not(template, condition);
        if condition {
            self.passed(&summary)
        } else {
            self.failed(&summary)
        }
    }

    /// Grade an installed version against semver range expressions.
    ///
    /// - not installed → `Fail`
    /// - violates `required` → `Fail`
    /// - satisfies `required` but violates `recommended` → `PassWithWarning`
    /// - otherwise → `Pass`
    fn validate_version(
        &self,
        tool: &str,
        installed: Option<&Version>,
        required: Option<&VersionReq>,
        recommended: Option<&VersionReq>,
    ) -> CheckResult {
        let Some(version) = installed else {
            return self.failed(&format!("{} is not installed", tool));
        };

        if let Some(req) = required {
            if !req.matches(version) {
                return self.failed(&format!(
                    "{} version is not {} ({})",
                    tool, req, version
                ));
            }
        }

        if let Some(rec) = recommended {
            if !rec.matches(version) {
                return self.warned(&format!(
                    "{} version is below recommended {} ({})",
                    tool, rec, version
                ));
            }
        }

        self.passed(&format!("{} version is {}", tool, version))
    }
}

impl std::fmt::Debug for dyn Check + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check").field("name", &self.name()).finish()
    }
}
