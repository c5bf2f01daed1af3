//! Dynamic Shelf CLI
//!
//! Merges shelf definition files found on the search path and writes one
//! shelf file for the host application to load.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use shelf_core::ShelfConfig;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{} failed to set up logging: {}", "warning:".yellow().bold(), e);
    }

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Resolved configuration");

    match cli.command {
        Commands::Build { output, sources } => {
            commands::run_build(config, &sources, output.as_deref())
        }
        Commands::Sources { sources, json } => commands::run_sources(config, &sources, json),
        Commands::Check { sources, json } => commands::run_check(config, &sources, json),
    }
}

fn load_config(cli: &Cli) -> Result<ShelfConfig> {
    let mut config = match &cli.config {
        Some(path) => ShelfConfig::load(path)?,
        None => ShelfConfig::default(),
    };
    if let Some(var) = &cli.search_var {
        config.search_var = var.clone();
    }
    Ok(config)
}
