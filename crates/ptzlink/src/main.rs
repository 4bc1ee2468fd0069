mod cli;
mod commands;
mod config;
mod error;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    // Config management works without (and possibly before) a valid
    // camera configuration.
    if let Command::Config { action } = &cli.command {
        return commands::config_cmd::run(&cli.global, action.clone());
    }

    let camera = config::resolve(&cli.global)?;

    match cli.command {
        Command::Watch => commands::watch::run(camera, &cli.global).await,
        Command::Info => commands::info::run(camera, &cli.global).await,
        Command::Ptz { action } => commands::ptz::run(camera, action).await,
        Command::Preset { action } => commands::preset::run(camera, action).await,
        Command::Config { .. } => Ok(()),
    }
}

/// Diagnostics go to stderr so variable output stays pipeable.
/// `RUST_LOG` wins over the `-v` mapping when set.
fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
