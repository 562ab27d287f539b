//! 1Password CLI checks.

use std::path::PathBuf;

use semver::VersionReq;

use crate::check::{Check, CheckResult, Suggestions};
use crate::error::Result;
use crate::files::json_account_exists;
use crate::os::CurrentOs;
use crate::shell::get_stdout;
use crate::version::get_cli_version;

/// Is the 1Password CLI (`op`) installed at an acceptable version?
#[derive(Debug)]
pub struct OnePasswordCliInstalled {
    required: Option<VersionReq>,
    recommended: Option<VersionReq>,
}

impl OnePasswordCliInstalled {
    pub const NAME: &'static str = "onePasswordCli.installed";

    pub fn new(required: Option<VersionReq>, recommended: Option<VersionReq>) -> Self {
        Self {
            required,
            recommended,
        }
    }
}

impl Check for OnePasswordCliInstalled {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn suggestions(&self) -> Suggestions {
        Suggestions::new()
            .with(CurrentOs::MacOs, "<cmd>brew install 1password-cli</cmd>")
            .with(
                CurrentOs::Generic,
                "
                Install the 1Password CLI (op):
                https://support.1password.com/command-line-getting-started/",
            )
    }

    fn check(&self) -> Result<CheckResult> {
        let installed = get_cli_version("op");
        Ok(self.validate_version(
            "1Password CLI",
            installed.as_ref(),
            self.required.as_ref(),
            self.recommended.as_ref(),
        ))
    }
}

/// Is a 1Password account shorthand configured for the current user?
///
/// With an `account_config` path the check inspects that JSON file
/// directly; otherwise it asks `op account list`. An unreadable or
/// malformed config file is an unexpected fault, not a plain failure.
#[derive(Debug)]
pub struct OnePasswordAccountConfigured {
    account: String,
    account_config: Option<PathBuf>,
}

impl OnePasswordAccountConfigured {
    pub fn new(account: impl Into<String>, account_config: Option<PathBuf>) -> Self {
        Self {
            account: account.into(),
            account_config,
        }
    }
}

impl Check for OnePasswordAccountConfigured {
    fn name(&self) -> String {
        format!("onePassword.accountConfigured.{}", self.account)
    }

    fn depends_on(&self) -> Vec<String> {
        vec![OnePasswordCliInstalled::NAME.to_string()]
    }

    fn suggestions(&self) -> Suggestions {
        Suggestions::new().with(
            CurrentOs::Generic,
            format!(
                "<cmd>op signin --account {}.1password.com</cmd>",
                self.account
            ),
        )
    }

    fn check(&self) -> Result<CheckResult> {
        let configured = match &self.account_config {
            Some(path) => json_account_exists(path, &self.account)?,
            None => {
                let domain = format!("{}.1password.com", self.account);
                get_stdout("op account list").is_some_and(|out| out.contains(&domain))
            }
        };
        Ok(self.verify(
            configured,
            &format!(
                "{} is <not/> configured with the 1Password CLI for the current user",
                self.account
            ),
        ))
    }
}
