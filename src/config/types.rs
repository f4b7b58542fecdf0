//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and the resolved configuration handed to each command handler.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    CONFIG_DIR_ENV, CONFIG_SUBDIR, CREDENTIALS_FILE, DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT,
    HOSTS_FILE,
};
use crate::error_handling::ConfigError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// isalive add example.com
/// isalive remove https://example.com
/// isalive scan --alert=false
/// isalive configure --from-address me@gmail.com --password secret --to-address ops@example.com
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "isalive",
    version,
    about = "A command-line monitoring application."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Directory holding hosts.json and email.json (default: ~/.cache/isalive)
    #[arg(long, global = true, env = CONFIG_DIR_ENV)]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new endpoint to monitoring.
    Add(AddArgs),
    /// Remove an endpoint from monitoring.
    Remove(RemoveArgs),
    /// Probe every monitored endpoint and report the results.
    Scan(ScanOptions),
    /// Configure the email account used to send alerts.
    Configure(ConfigureArgs),
}

/// Arguments of `add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Endpoint to monitor; `https://` is prepended when no scheme is given
    pub endpoint: String,
}

/// Arguments of `remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Endpoint to remove, matched exactly against the stored value
    pub endpoint: String,
}

/// Options controlling a scan.
#[derive(Debug, Clone, Args)]
pub struct ScanOptions {
    /// Email an alert when any endpoint fails (`--alert=false` to disable)
    #[arg(
        long,
        default_value_t = true,
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub alert: bool,

    /// Maximum probes in flight at once (0 = one per endpoint, unbounded)
    #[arg(long, default_value_t = 0)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds (default: the HTTP client's own)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            alert: true,
            max_concurrency: 0,
            timeout_seconds: None,
        }
    }
}

/// Arguments of `configure`.
#[derive(Debug, Args)]
pub struct ConfigureArgs {
    /// The email used to send notifications
    #[arg(long = "from-address", alias = "fromAddress")]
    pub from_address: String,

    /// The password for the email used to send notifications
    #[arg(long)]
    pub password: String,

    /// The email to receive notifications
    #[arg(long = "to-address", alias = "toAddress")]
    pub to_address: String,

    /// SMTP submission relay
    #[arg(long, default_value = DEFAULT_SMTP_HOST)]
    pub smtp_host: String,

    /// SMTP submission port
    #[arg(long, default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,
}

/// Resolved configuration shared by all command handlers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the host list and credentials
    pub config_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Config {
    /// Builds a configuration rooted at `config_dir`, or at
    /// `<home>/.cache/isalive` when none is given.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::HomeDirectoryUnavailable` when no directory was
    /// given and the user's home directory cannot be determined.
    pub fn resolve(
        config_dir: Option<PathBuf>,
        log_level: LogLevel,
        log_format: LogFormat,
    ) -> Result<Self, ConfigError> {
        let config_dir = match config_dir {
            Some(dir) => dir,
            None => dirs::home_dir()
                .ok_or(ConfigError::HomeDirectoryUnavailable)?
                .join(CONFIG_SUBDIR),
        };
        Ok(Self {
            config_dir,
            log_level,
            log_format,
        })
    }

    /// Builds a configuration from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve(
            cli.config_dir.clone(),
            cli.log_level.clone(),
            cli.log_format.clone(),
        )
    }

    /// Creates the configuration directory (owner-only on Unix) if missing.
    pub fn ensure_dir(&self) -> Result<(), ConfigError> {
        create_private_dir(&self.config_dir).map_err(|source| ConfigError::CreateDirectory {
            path: self.config_dir.clone(),
            source,
        })
    }

    /// Path of the host list file.
    pub fn hosts_path(&self) -> PathBuf {
        self.config_dir.join(HOSTS_FILE)
    }

    /// Path of the credentials file.
    pub fn credentials_path(&self) -> PathBuf {
        self.config_dir.join(CREDENTIALS_FILE)
    }
}

#[cfg(unix)]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::DirBuilderExt;
    std::fs::DirBuilder::new()
        .recursive(true)
        .mode(0o700)
        .create(path)
}

#[cfg(not(unix))]
fn create_private_dir(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}
