//! CLI argument definitions.
//!
//! All arguments are defined with clap's derive macros. The main entry
//! point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

/// Medkit - Development environment diagnostics.
#[derive(Debug, Parser)]
#[command(name = "medkit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default .medkit.yml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run only specified checks (comma-separated names)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Suppress passing checks and show a progress bar instead
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a count summary after all checks have run
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
