//! Error types for medkit operations.
//!
//! This module defines [`MedkitError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `MedkitError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `MedkitError::Other`) for unexpected errors
//! - A failing check is NOT an error: it is a regular `CheckResult` with a
//!   `Fail` status. `MedkitError` is reserved for the unexpected-fault channel
//!   (a check that could not run at all) and for configuration problems.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for medkit operations.
#[derive(Debug, Error)]
pub enum MedkitError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Config references a check kind that isn't in the registry.
    #[error("Unknown check kind: {kind}")]
    UnknownCheck { kind: String },

    /// Check dependency cycle detected at config-build time.
    #[error("Circular dependency detected: {cycle}")]
    CircularDependency { cycle: String },

    /// External command could not be spawned or was killed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Invalid semver range expression in a check's configuration.
    #[error("Invalid version expression '{expression}': {message}")]
    InvalidVersionExpression {
        expression: String,
        message: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for medkit operations.
pub type Result<T> = std::result::Result<T, MedkitError>;
