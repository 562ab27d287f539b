//! Config-driven generic checks.
//!
//! These carry their name, dependency list, and suggestion table straight
//! from the config file, so projects can express one-off inspections
//! without writing a plugin.

use std::path::PathBuf;

use crate::check::{Check, CheckResult, Suggestions};
use crate::error::Result;
use crate::files::file_exists;
use crate::shell::get_stdout;

/// Passes when an arbitrary shell command exits zero.
#[derive(Debug)]
pub struct CommandSucceeds {
    name: String,
    command: String,
    summary: String,
    depends_on: Vec<String>,
    suggestions: Suggestions,
}

impl CommandSucceeds {
    pub fn new(
        name: impl Into<String>,
        command: impl Into<String>,
        summary: Option<String>,
        depends_on: Vec<String>,
        suggestions: Suggestions,
    ) -> Self {
        let command = command.into();
        let summary =
            summary.unwrap_or_else(|| format!("`{}` did <not/> succeed", command));
        Self {
            name: name.into(),
            command,
            summary,
            depends_on,
            suggestions,
        }
    }
}

impl Check for CommandSucceeds {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn depends_on(&self) -> Vec<String> {
        self.depends_on.clone()
    }

    fn suggestions(&self) -> Suggestions {
        self.suggestions.clone()
    }

    fn check(&self) -> Result<CheckResult> {
        let succeeded = get_stdout(&self.command).is_some();
        Ok(self.verify(succeeded, &self.summary))
    }
}

/// Passes when a path exists and is a regular file.
#[derive(Debug)]
pub struct FileExists {
    name: String,
    path: PathBuf,
    depends_on: Vec<String>,
    suggestions: Suggestions,
}

impl FileExists {
    pub fn new(
        name: Option<String>,
        path: PathBuf,
        depends_on: Vec<String>,
        suggestions: Suggestions,
    ) -> Self {
        let name = name.unwrap_or_else(|| format!("file.exists.{}", path.display()));
        Self {
            name,
            path,
            depends_on,
            suggestions,
        }
    }
}

impl Check for FileExists {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn depends_on(&self) -> Vec<String> {
        self.depends_on.clone()
    }

    fn suggestions(&self) -> Suggestions {
        self.suggestions.clone()
    }

    fn check(&self) -> Result<CheckResult> {
        Ok(self.verify(
            file_exists(&self.path),
            &format!("{} does <not/> exist", self.path.display()),
        ))
    }
}

/// Passes when an environment variable is set and non-empty.
#[derive(Debug)]
pub struct EnvVarSet {
    name: String,
    var: String,
    suggestions: Suggestions,
}

impl EnvVarSet {
    pub fn new(name: Option<String>, var: impl Into<String>, suggestions: Suggestions) -> Self {
        let var = var.into();
        let name = name.unwrap_or_else(|| format!("env.{}", var));
        Self {
            name,
            var,
            suggestions,
        }
    }
}

impl Check for EnvVarSet {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn suggestions(&self) -> Suggestions {
        self.suggestions.clone()
    }

    fn check(&self) -> Result<CheckResult> {
        let set = std::env::var(&self.var).map(|v| !v.is_empty()).unwrap_or(false);
        Ok(self.verify(set, &format!("{} is <not/> set", self.var)))
    }
}
