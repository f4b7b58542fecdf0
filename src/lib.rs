//! isalive library: endpoint liveness monitoring
//!
//! Keeps a list of HTTP(S) endpoints in a local JSON file, probes all of them
//! concurrently with one GET each, reports `<endpoint> <status>` per endpoint
//! and optionally emails an alert listing the endpoints that failed
//! (status 300 or above, or no response).
//!
//! # Example
//!
//! ```no_run
//! use isalive::{run_scan, Config, LogFormat, LogLevel, ScanOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::resolve(None, LogLevel::Info, LogFormat::Plain)?;
//! config.ensure_dir()?;
//!
//! let report = run_scan(&config, &ScanOptions::default()).await?;
//! println!("{} of {} endpoints failing", report.failing.len(), report.hosts.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! Scanning requires a Tokio runtime.

#![warn(missing_docs)]

pub mod app;
pub mod commands;
pub mod config;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod notify;
pub mod probe;
pub mod scan;
pub mod storage;

// Re-export public API
pub use config::{Cli, Command, Config, LogFormat, LogLevel, ScanOptions};
pub use models::{EmailCredentials, Host};
pub use scan::{run_scan, run_scan_with, scan_hosts, ScanReport, ScanSummary};
