//! Version extraction and semver range parsing.
//!
//! Tool `--version` output is messy (`Client Version: v1.25.4`,
//! `helm v3.11.1+g293b50c`), so extraction is regex-driven and parsing is
//! lenient: missing minor/patch components are padded with zeros, which
//! lets a `1.25`-style report satisfy `>=1.20` range expressions.

use std::sync::LazyLock;

use regex::Regex;
use semver::{Version, VersionReq};

use crate::error::{MedkitError, Result};
use crate::shell::get_stdout;

static SEMVER_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+(?:\.[0-9]+){0,2})").unwrap());

/// Parse a version string, padding missing components with zeros.
///
/// `"1.25"` parses as `1.25.0`, `"3"` as `3.0.0`. Leading `v` prefixes
/// and surrounding whitespace are tolerated. Build/pre-release suffixes
/// are not: extraction is expected to hand over plain numeric tokens.
pub fn parse_lenient(raw: &str) -> Option<Version> {
    let trimmed = raw.trim().trim_start_matches('v');
    let mut parts = trimmed.split('.');

    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().map_or(Some(0), |p| p.parse().ok())?;
    let patch = parts.next().map_or(Some(0), |p| p.parse().ok())?;
    if parts.next().is_some() {
        return None;
    }

    Some(Version::new(major, minor, patch))
}

/// Extract a version from raw command output using a capture pattern.
///
/// The pattern's first capture group must isolate the numeric version
/// (e.g. `"Client Version: v([0-9.]+)"`).
pub fn extract_version(raw: &str, pattern: &Regex) -> Option<Version> {
    let captured = pattern.captures(raw)?.get(1)?.as_str();
    let version = parse_lenient(captured);
    tracing::debug!(captured, ?version, "extracted version");
    version
}

/// Ask a CLI tool for its version and take the first semver-looking token.
///
/// Runs `<binary> --version`; returns `None` when the tool is missing,
/// exits non-zero, or reports nothing parseable.
pub fn get_cli_version(binary: &str) -> Option<Version> {
    let raw = get_stdout(&format!("{} --version", binary))?;
    extract_version(&raw, &SEMVER_TOKEN)
}

/// Parse a semver range expression (`>=1.2`, `^1.2.3`, `~0.4`).
///
/// Config-supplied expressions go through this so a typo surfaces as a
/// load-time error rather than a silently-passing check.
pub fn parse_req(expression: &str) -> Result<VersionReq> {
    VersionReq::parse(expression).map_err(|e| MedkitError::InvalidVersionExpression {
        expression: expression.to_string(),
        message: e.to_string(),
    })
}
