//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Diagnostics setup
//! - Turning failures into a one-line message and an exit code

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use weather_core::WeatherError;

mod cli;

#[tokio::main]
async fn main() {
    let cmd = cli::Cli::parse();
    init_tracing(cmd.verbose, cmd.no_color);

    if let Err(err) = cmd.run().await {
        eprintln!("{err}");
        let code = err.downcast_ref::<WeatherError>().map_or(1, WeatherError::exit_code);
        std::process::exit(code);
    }
}

/// Filter used when `RUST_LOG` is unset. Library diagnostics only show with `-v`.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn use_ansi(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8, no_color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(no_color, std::io::stderr().is_terminal()))
        .with_target(false)
        .init();
}
