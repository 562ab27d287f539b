//! Built-in check plugins and the kind registry.

pub mod generic;
pub mod kubernetes;
pub mod onepassword;

use std::path::PathBuf;

use semver::VersionReq;

use crate::check::Check;
use crate::config::CheckSpec;
use crate::error::{MedkitError, Result};
use crate::version;

pub use generic::{CommandSucceeds, EnvVarSet, FileExists};
pub use kubernetes::{HelmInstalled, KubectlContextExists, KubectlInstalled};
pub use onepassword::{OnePasswordAccountConfigured, OnePasswordCliInstalled};

/// Instantiate the check a config entry describes.
///
/// Rejects unknown kinds and entries missing the fields their kind
/// requires, so a bad config fails before any check runs.
pub fn build(spec: &CheckSpec) -> Result<Box<dyn Check>> {
    let required = parse_req_field(&spec.required_version)?;
    let recommended = parse_req_field(&spec.recommended_version)?;

    let check: Box<dyn Check> = match spec.kind.as_str() {
        "kubectl.installed" => Box::new(KubectlInstalled::new(required, recommended)),
        "kubectl.context" => Box::new(KubectlContextExists::new(
            require_field(spec, "context", &spec.context)?,
            spec.provision_command.clone(),
        )),
        "helm.installed" => Box::new(HelmInstalled::new(required, recommended)),
        "onepassword.cli" => Box::new(OnePasswordCliInstalled::new(required, recommended)),
        "onepassword.account" => Box::new(OnePasswordAccountConfigured::new(
            require_field(spec, "account", &spec.account)?,
            spec.account_config.clone(),
        )),
        "command.succeeds" => Box::new(CommandSucceeds::new(
            require_field(spec, "name", &spec.name)?,
            require_field(spec, "command", &spec.command)?,
            spec.summary.clone(),
            spec.depends_on.clone(),
            spec.suggestions(),
        )),
        "file.exists" => Box::new(FileExists::new(
            spec.name.clone(),
            require_path_field(spec, "path", &spec.path)?,
            spec.depends_on.clone(),
            spec.suggestions(),
        )),
        "env.set" => Box::new(EnvVarSet::new(
            spec.name.clone(),
            require_field(spec, "var", &spec.var)?,
            spec.suggestions(),
        )),
        _ => {
            return Err(MedkitError::UnknownCheck {
                kind: spec.kind.clone(),
            })
        }
    };
    Ok(check)
}

fn require_field(spec: &CheckSpec, field: &str, value: &Option<String>) -> Result<String> {
    value
        .clone()
        .ok_or_else(|| MedkitError::ConfigValidationError {
            message: format!("check kind `{}` requires `{}`", spec.kind, field),
        })
}

fn require_path_field(spec: &CheckSpec, field: &str, value: &Option<PathBuf>) -> Result<PathBuf> {
    value
        .clone()
        .ok_or_else(|| MedkitError::ConfigValidationError {
            message: format!("check kind `{}` requires `{}`", spec.kind, field),
        })
}

fn parse_req_field(value: &Option<String>) -> Result<Option<VersionReq>> {
    value.as_deref().map(version::parse_req).transpose()
}
