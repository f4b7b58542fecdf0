//! Command handlers.
//!
//! Each handler receives the resolved [`Config`]; none read process-wide state.

use anyhow::{Context, Result};

use crate::config::{AddArgs, Command, Config, ConfigureArgs, RemoveArgs};
use crate::models::{EmailCredentials, Host};
use crate::scan::run_scan;
use crate::storage::{CredentialStore, HostStore};

/// Dispatches a parsed subcommand.
///
/// # Errors
///
/// Returns storage write failures and HTTP client initialization failures.
/// None of these are fatal to the caller; see `main`.
pub async fn dispatch(config: &Config, command: Command) -> Result<()> {
    match command {
        Command::Add(AddArgs { endpoint }) => {
            add_endpoint(config, &endpoint)?;
        }
        Command::Remove(RemoveArgs { endpoint }) => {
            remove_endpoint(config, &endpoint)?;
        }
        Command::Scan(options) => {
            run_scan(config, &options).await?;
        }
        Command::Configure(args) => configure(config, args)?,
    }
    Ok(())
}

/// Normalizes `endpoint` and appends it to the monitored list.
pub fn add_endpoint(config: &Config, endpoint: &str) -> Result<Host> {
    HostStore::from_config(config)
        .add(endpoint)
        .context("Failed to add endpoint")
}

/// Removes the first monitored host whose endpoint equals `endpoint` exactly.
///
/// Removing an endpoint that is not monitored is not an error.
pub fn remove_endpoint(config: &Config, endpoint: &str) -> Result<bool> {
    HostStore::from_config(config)
        .remove(endpoint)
        .context("Failed to remove endpoint")
}

/// Stores the SMTP credentials used for alerts.
pub fn configure(config: &Config, args: ConfigureArgs) -> Result<()> {
    let credentials = EmailCredentials {
        from_address: args.from_address,
        password: args.password,
        to_address: args.to_address,
        smtp_host: args.smtp_host,
        smtp_port: args.smtp_port,
    };
    CredentialStore::from_config(config)
        .save(&credentials)
        .context("Failed to save email credentials")
}
