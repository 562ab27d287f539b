//! Medkit CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use medkit::cli::Cli;
use medkit::config::{Config, DEFAULT_CONFIG_FILE};
use medkit::runner::CheckRunner;
use medkit::ui::CheckPrinter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("medkit=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("medkit=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> medkit::Result<bool> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = Config::load(&config_path)?;

    let mut checks = config.build_checks()?;
    if !cli.only.is_empty() {
        checks.retain(|check| cli.only.iter().any(|name| *name == check.name()));
    }

    let printer = CheckPrinter::new(cli.quiet);
    let report = CheckRunner::new().run_with_observer(&checks, |result, current, total| {
        printer.print_result(result, current, total);
    });
    printer.finish();

    if cli.verbose {
        println!("{}", printer.render_summary(report.results()));
    }

    Ok(report.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Medkit starting with args: {:?}", cli);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}
