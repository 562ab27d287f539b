//! Project configuration loading.
//!
//! A project declares its checks in a `.medkit.yml` at the repository
//! root. Each entry names a check `kind` plus the fields that kind
//! needs; unknown kinds and missing required fields are rejected before
//! anything runs, as is any dependency cycle among the declared checks.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::check::{Check, Suggestions};
use crate::checks;
use crate::error::{MedkitError, Result};
use crate::os::CurrentOs;
use crate::runner::DependencyGraph;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".medkit.yml";

/// One check entry from the config file.
///
/// Only `kind` is universally required; which of the other fields matter
/// depends on the kind, and the registry in [`checks::build`] enforces
/// that per kind.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckSpec {
    pub kind: String,
    pub name: Option<String>,
    pub command: Option<String>,
    pub summary: Option<String>,
    pub path: Option<PathBuf>,
    pub var: Option<String>,
    pub context: Option<String>,
    pub provision_command: Option<String>,
    pub account: Option<String>,
    pub account_config: Option<PathBuf>,
    pub required_version: Option<String>,
    pub recommended_version: Option<String>,
    #[serde(default)]
    pub depends_on: Vec<String>,
    #[serde(default)]
    pub suggestions: BTreeMap<CurrentOs, String>,
}

impl CheckSpec {
    /// Suggestion table declared in the config, if any.
    pub fn suggestions(&self) -> Suggestions {
        Suggestions::from(self.suggestions.clone())
    }
}

/// Top-level config document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

impl Config {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|_| MedkitError::ConfigNotFound {
            path: path.to_path_buf(),
        })?;
        let config: Config =
            serde_yaml::from_str(&raw).map_err(|source| MedkitError::ConfigParseError {
                path: path.to_path_buf(),
                message: source.to_string(),
            })?;
        debug!(path = %path.display(), checks = config.checks.len(), "loaded config");
        Ok(config)
    }

    /// Instantiate every declared check and validate the dependency graph.
    pub fn build_checks(&self) -> Result<Vec<Box<dyn Check>>> {
        let built: Vec<Box<dyn Check>> = self
            .checks
            .iter()
            .map(checks::build)
            .collect::<Result<_>>()?;
        DependencyGraph::from_checks(&built).validate()?;
        Ok(built)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(body: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_minimal_config() {
        let file = write_config(
            "checks:\n  - kind: kubectl.installed\n    required_version: \">=1.20\"\n",
        );
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.checks.len(), 1);
        assert_eq!(config.checks[0].kind, "kubectl.installed");
        assert_eq!(config.checks[0].required_version.as_deref(), Some(">=1.20"));
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let err = Config::load(Path::new("/nonexistent/.medkit.yml")).unwrap_err();
        assert!(matches!(err, MedkitError::ConfigNotFound { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let file = write_config("checks: [unclosed\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, MedkitError::ConfigParseError { .. }));
    }

    #[test]
    fn unknown_top_level_key_is_rejected() {
        let file = write_config("cheks: []\n");
        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn suggestions_deserialize_by_os() {
        let file = write_config(
            "checks:\n  - kind: file.exists\n    path: .env\n    suggestions:\n      macos: touch .env\n      generic: copy .env.example\n",
        );
        let config = Config::load(file.path()).unwrap();
        let suggestions = config.checks[0].suggestions();
        assert_eq!(suggestions.get(CurrentOs::MacOs), Some("touch .env"));
        assert_eq!(
            suggestions.most_specific(CurrentOs::Ubuntu),
            Some("copy .env.example")
        );
    }

    #[test]
    fn build_checks_rejects_a_cycle() {
        let file = write_config(
            "checks:\n  - kind: command.succeeds\n    name: a\n    command: \"true\"\n    depends_on: [b]\n  - kind: command.succeeds\n    name: b\n    command: \"true\"\n    depends_on: [a]\n",
        );
        let config = Config::load(file.path()).unwrap();
        let err = config.build_checks().unwrap_err();
        assert!(matches!(err, MedkitError::CircularDependency { .. }));
    }

    #[test]
    fn build_checks_instantiates_every_entry() {
        let file = write_config(
            "checks:\n  - kind: kubectl.installed\n  - kind: kubectl.context\n    context: minikube\n  - kind: env.set\n    var: HOME\n",
        );
        let config = Config::load(file.path()).unwrap();
        let built = config.build_checks().unwrap();
        let names: Vec<String> = built.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["kubectl.installed", "kubectl.contextExists.minikube", "env.HOME"]
        );
    }
}
