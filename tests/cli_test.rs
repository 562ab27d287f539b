//! Integration tests for the CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".medkit.yml"), config).unwrap();
    temp
}

fn medkit() -> Command {
    Command::new(cargo_bin("medkit"))
}

const PASSING_CONFIG: &str = r#"
checks:
  - kind: env.set
    var: HOME
  - kind: command.succeeds
    name: shell.works
    command: "true"
"#;

#[test]
fn passing_checks_exit_zero() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(PASSING_CONFIG);
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("env.HOME"))
        .stdout(predicate::str::contains("shell.works"));
    Ok(())
}

#[test]
fn failing_check_exits_nonzero_with_suggestion() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
checks:
  - kind: file.exists
    name: env.file
    path: .env
    suggestions:
      generic: cp .env.example .env
"#,
    );
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(".env does not exist"))
        .stdout(predicate::str::contains("💡 Suggestion"))
        .stdout(predicate::str::contains("cp .env.example .env"));
    Ok(())
}

#[test]
fn dependents_of_failed_checks_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
checks:
  - kind: command.succeeds
    name: gate
    command: "false"
  - kind: command.succeeds
    name: behind.gate
    command: "true"
    depends_on: [gate]
"#,
    );
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.assert().failure().stdout(predicate::str::contains(
        "Dependency gate has not passed, skipping this check",
    ));
    Ok(())
}

#[test]
fn quiet_mode_hides_passes_and_shows_progress() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(PASSING_CONFIG);
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.arg("--quiet");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("env.HOME").not())
        .stdout(predicate::str::contains("Progress: ["))
        .stdout(predicate::str::contains("100% (2/2)"));
    Ok(())
}

#[test]
fn quiet_mode_still_renders_failures_with_a_blank_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
checks:
  - kind: env.set
    var: HOME
  - kind: file.exists
    name: env.file
    path: .env
    suggestions:
      generic: cp .env.example .env
"#,
    );
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.arg("--quiet");
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains(".env does not exist"))
        .stdout(predicate::str::contains("cp .env.example .env"))
        // rendered block is followed by one blank line before the
        // progress line is redrawn
        .stdout(predicate::str::contains("┘\n\n"))
        .stdout(predicate::str::contains("Progress: ["))
        .stdout(predicate::str::contains("env.HOME").not());
    Ok(())
}

#[test]
fn verbose_appends_a_count_summary() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(PASSING_CONFIG);
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.arg("--verbose");
    cmd.assert().success().stdout(predicate::str::contains(
        "2 checks: 2 passed, 0 warnings, 0 failed, 0 errors",
    ));
    Ok(())
}

#[test]
fn only_filter_limits_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(PASSING_CONFIG);
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.args(["--only", "env.HOME"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("env.HOME"))
        .stdout(predicate::str::contains("shell.works").not());
    Ok(())
}

#[test]
fn missing_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(".medkit.yml"));
    Ok(())
}

#[test]
fn unknown_kind_is_reported_before_running() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("checks:\n  - kind: no.such.check\n");
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no.such.check"));
    Ok(())
}

#[test]
fn dependency_cycle_is_reported_before_running() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(
        r#"
checks:
  - kind: command.succeeds
    name: a
    command: "true"
    depends_on: [b]
  - kind: command.succeeds
    name: b
    command: "true"
    depends_on: [a]
"#,
    );
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency detected"));
    Ok(())
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = medkit();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("--only"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = medkit();
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn config_flag_overrides_the_default_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config = temp.path().join("custom.yml");
    fs::write(&config, PASSING_CONFIG)?;
    let mut cmd = medkit();
    cmd.current_dir(temp.path());
    cmd.args(["--config", "custom.yml"]);
    cmd.assert().success();
    Ok(())
}
