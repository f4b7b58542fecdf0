//! Main application entry point (CLI binary).
//!
//! Parses arguments, initializes logging, resolves the configuration directory
//! and hands off to the library. Only configuration errors change the exit
//! code; everything else is reported and the process exits normally.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use isalive::commands::dispatch;
use isalive::initialization::init_logger_with;
use isalive::{Cli, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    let config = match Config::from_cli(&cli).and_then(|config| {
        config.ensure_dir()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("isalive error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = dispatch(&config, cli.command).await {
        eprintln!("isalive error: {:#}", e);
    }
    Ok(())
}
