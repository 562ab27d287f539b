//! Medkit - Development environment diagnostics.
//!
//! Medkit runs a set of checks against the local machine, reports which
//! ones pass, and prints OS-specific remediation suggestions for the
//! ones that do not. Checks can depend on each other; a check whose
//! dependency has not passed is skipped rather than run against a
//! machine that is known to be missing something.
//!
//! The library is organized into:
//! - [`check`]: the `Check` trait, statuses, results, and suggestions
//! - [`checks`]: built-in check plugins and the kind registry
//! - [`config`]: `.medkit.yml` loading and validation
//! - [`runner`]: dependency validation and single-pass execution
//! - [`ui`]: terminal output, suggestion boxes, and the progress bar

pub mod check;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod os;
pub mod runner;
pub mod shell;
pub mod text;
pub mod ui;
pub mod version;

pub use error::{MedkitError, Result};
