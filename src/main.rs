//! Buildprep CLI entry point.

use std::process::ExitCode;

use buildprep::cli::{Cli, CommandDispatcher};
use buildprep::error::exit_status;
use buildprep::ui::{ConsoleLogger, Logger};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN, so diagnostics stay out of normal output
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("buildprep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("buildprep=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("buildprep starting with args: {:?}", cli);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let working_dir = std::env::current_dir().unwrap_or_default();
    let mut ui = ConsoleLogger::new();

    let dispatcher = CommandDispatcher::new(working_dir);

    match dispatcher.dispatch(&cli, &mut ui) {
        Ok(result) => ExitCode::from(exit_status(result.exit_code)),
        Err(e) => {
            if !e.is_reported() {
                ui.error(&e.to_string());
            }
            ExitCode::from(e.exit_status())
        }
    }
}
