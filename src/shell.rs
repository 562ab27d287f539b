//! External command execution.
//!
//! Checks inspect the host by invoking CLI tools (`kubectl version`,
//! `op account list`, ...). The contract is deliberately quiet:
//! [`get_stdout`] returns `None` on any failure — command missing,
//! spawn error, non-zero exit — because "tool not usable" is an expected
//! check outcome, not a program error. [`try_get_stdout`] is the loud
//! variant for checks that want spawn failures on the fault channel.

use std::process::Command;

use crate::error::{MedkitError, Result};

/// Run a command via the system shell and capture trimmed stdout.
///
/// Returns `None` if the command could not be spawned or exited non-zero.
pub fn get_stdout(command: &str) -> Option<String> {
    let output = shell_command(command).output().ok()?;
    if !output.status.success() {
        tracing::debug!(command, code = ?output.status.code(), "command exited non-zero");
        return None;
    }
    Some(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

/// Run a command, surfacing failure as an error instead of `None`.
pub fn try_get_stdout(command: &str) -> Result<String> {
    let output = shell_command(command)
        .output()
        .map_err(|_| MedkitError::CommandFailed {
            command: command.to_string(),
            code: None,
        })?;

    if !output.status.success() {
        return Err(MedkitError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
}

fn shell_command(command: &str) -> Command {
    let (shell, flag) = if cfg!(target_os = "windows") {
        (
            std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string()),
            "/C",
        )
    } else {
        ("/bin/sh".to_string(), "-c")
    };

    let mut cmd = Command::new(shell);
    cmd.arg(flag);
    cmd.arg(command);
    cmd
}
