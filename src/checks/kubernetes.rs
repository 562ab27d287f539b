//! Kubernetes tooling checks: kubectl and helm.

use std::sync::LazyLock;

use regex::Regex;
use semver::{Version, VersionReq};

use crate::check::{Check, CheckResult, Suggestions};
use crate::error::Result;
use crate::os::CurrentOs;
use crate::shell::get_stdout;
use crate::version::extract_version;

static KUBECTL_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Client Version: v([0-9.]+)").unwrap());
static HELM_VERSION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"v([0-9.]+)").unwrap());

/// Is kubectl installed, and at an acceptable version?
#[derive(Debug)]
pub struct KubectlInstalled {
    required: Option<VersionReq>,
    recommended: Option<VersionReq>,
}

impl KubectlInstalled {
    pub const NAME: &'static str = "kubectl.installed";

    pub fn new(required: Option<VersionReq>, recommended: Option<VersionReq>) -> Self {
        Self {
            required,
            recommended,
        }
    }
}

impl Check for KubectlInstalled {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn suggestions(&self) -> Suggestions {
        Suggestions::new()
            .with(CurrentOs::MacOs, "<cmd>brew install kubectl</cmd>")
            .with(
                CurrentOs::Ubuntu,
                "<cmd>sudo snap install kubectl --classic</cmd>",
            )
            .with(
                CurrentOs::Generic,
                "Install kubectl: https://kubernetes.io/docs/tasks/tools/#kubectl",
            )
    }

    fn check(&self) -> Result<CheckResult> {
        let installed = kubectl_version();
        Ok(self.validate_version(
            "Kubectl",
            installed.as_ref(),
            self.required.as_ref(),
            self.recommended.as_ref(),
        ))
    }
}

fn kubectl_version() -> Option<Version> {
    let raw = get_stdout("kubectl version --client=true")?;
    extract_version(&raw, &KUBECTL_VERSION)
}

/// Does the named kubectl context exist for the current user?
///
/// Depends on [`KubectlInstalled`]; without kubectl on the PATH the
/// context lookup is meaningless.
#[derive(Debug)]
pub struct KubectlContextExists {
    context: String,
    provision_command: Option<String>,
}

impl KubectlContextExists {
    pub fn new(context: impl Into<String>, provision_command: Option<String>) -> Self {
        Self {
            context: context.into(),
            provision_command,
        }
    }
}

impl Check for KubectlContextExists {
    fn name(&self) -> String {
        format!("kubectl.contextExists.{}", self.context)
    }

    fn depends_on(&self) -> Vec<String> {
        vec![KubectlInstalled::NAME.to_string()]
    }

    fn suggestions(&self) -> Suggestions {
        match &self.provision_command {
            Some(command) => Suggestions::new().with(
                CurrentOs::Generic,
                format!(
                    "The {} kubectl context is missing, provision it with:\n<cmd>{}</cmd>",
                    self.context, command
                ),
            ),
            None => Suggestions::new(),
        }
    }

    fn check(&self) -> Result<CheckResult> {
        let output = get_stdout("kubectl config get-contexts");
        let present = output.is_some_and(|o| o.contains(&self.context));
        Ok(self.verify(
            present,
            &format!("{} is <not/> configured for the current user", self.context),
        ))
    }
}

/// Is helm installed, and at an acceptable version?
#[derive(Debug)]
pub struct HelmInstalled {
    required: Option<VersionReq>,
    recommended: Option<VersionReq>,
}

impl HelmInstalled {
    pub const NAME: &'static str = "helm.installed";

    pub fn new(required: Option<VersionReq>, recommended: Option<VersionReq>) -> Self {
        Self {
            required,
            recommended,
        }
    }
}

impl Check for HelmInstalled {
    fn name(&self) -> String {
        Self::NAME.to_string()
    }

    fn suggestions(&self) -> Suggestions {
        Suggestions::new()
            .with(CurrentOs::MacOs, "<cmd>brew install helm</cmd>")
            .with(
                CurrentOs::Ubuntu,
                "<cmd>sudo snap install helm --classic</cmd>",
            )
            .with(
                CurrentOs::Generic,
                "Install Helm: https://helm.sh/docs/intro/install/",
            )
    }

    fn check(&self) -> Result<CheckResult> {
        let installed = helm_version();
        Ok(self.validate_version(
            "Helm",
            installed.as_ref(),
            self.required.as_ref(),
            self.recommended.as_ref(),
        ))
    }
}

fn helm_version() -> Option<Version> {
    let raw = get_stdout("helm version --short")?;
    extract_version(&raw, &HELM_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kubectl_pattern_matches_client_version_line() {
        let raw = "Client Version: v1.25.4\nKustomize Version: v4.5.7";
        assert_eq!(
            extract_version(raw, &KUBECTL_VERSION),
            Some(Version::new(1, 25, 4))
        );
    }

    #[test]
    fn kubectl_pattern_ignores_server_only_output() {
        assert_eq!(extract_version("error: unknown flag", &KUBECTL_VERSION), None);
    }

    #[test]
    fn helm_pattern_matches_short_version() {
        assert_eq!(
            extract_version("v3.11.1+g293b50c", &HELM_VERSION),
            Some(Version::new(3, 11, 1))
        );
    }

    #[test]
    fn context_check_name_embeds_the_context() {
        let check = KubectlContextExists::new("dev-cluster", None);
        assert_eq!(check.name(), "kubectl.contextExists.dev-cluster");
    }

    #[test]
    fn context_check_depends_on_kubectl() {
        let check = KubectlContextExists::new("dev", None);
        assert_eq!(check.depends_on(), vec!["kubectl.installed".to_string()]);
    }

    #[test]
    fn context_suggestion_only_with_provision_command() {
        let bare = KubectlContextExists::new("dev", None);
        assert!(bare.suggestions().is_empty());

        let provisioned =
            KubectlContextExists::new("dev", Some("gcloud container clusters get-credentials dev".into()));
        let text = provisioned
            .suggestions()
            .most_specific(CurrentOs::Generic)
            .unwrap()
            .to_string();
        assert!(text.contains("<cmd>gcloud container clusters get-credentials dev</cmd>"));
    }

    #[test]
    fn installed_check_names_are_stable() {
        assert_eq!(KubectlInstalled::new(None, None).name(), "kubectl.installed");
        assert_eq!(HelmInstalled::new(None, None).name(), "helm.installed");
    }

    #[test]
    fn installed_checks_have_os_specific_suggestions() {
        let s = KubectlInstalled::new(None, None).suggestions();
        assert!(s.get(CurrentOs::MacOs).unwrap().contains("brew"));
        assert!(s.get(CurrentOs::Ubuntu).unwrap().contains("snap"));
        assert!(s.get(CurrentOs::Generic).unwrap().contains("https://"));
    }
}
