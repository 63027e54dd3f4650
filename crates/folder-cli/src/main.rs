//! folder-sync CLI
//!
//! Creates the folders that exist under a source root but are missing under
//! a target root, with interactive selection and confirmation.

mod cli;
mod commands;
mod config;
mod error;
mod interactive;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use commands::SyncRequest;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);
    tracing::debug!("Verbose mode enabled");

    let cwd = std::env::current_dir()?;
    commands::run_sync(&cwd, &into_request(cli))
}

fn into_request(cli: Cli) -> SyncRequest {
    SyncRequest {
        source: cli.source,
        target: cli.target,
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        auto: cli.auto,
        config: cli.config,
        exclude: cli.exclude,
    }
}
