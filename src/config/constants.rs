//! Configuration constants.
//!
//! File names, SMTP defaults and the status threshold used when classifying
//! scan results.

/// Directory (relative to the user's home) holding all isalive state.
pub const CONFIG_SUBDIR: &str = ".cache/isalive";

/// File holding the monitored host list.
pub const HOSTS_FILE: &str = "hosts.json";

/// File holding the SMTP credentials written by `configure`.
pub const CREDENTIALS_FILE: &str = "email.json";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "ISALIVE_CONFIG_DIR";

/// Hosts answering with a status at or above this value are reported as failing.
/// Redirects (3xx) count as failures.
pub const FAILURE_STATUS_THRESHOLD: u16 = 300;

/// Status of a host that has never been probed successfully.
pub const UNKNOWN_STATUS: u16 = 0;

/// Default SMTP submission relay.
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP submission port (STARTTLS).
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// SMTP port that speaks TLS from the first byte (SMTPS) instead of STARTTLS.
pub const IMPLICIT_TLS_SMTP_PORT: u16 = 465;

/// Subject line of the alert email.
pub const ALERT_SUBJECT: &str = "Health Check Failed!";

/// Header placed above the failing hosts in the alert body.
pub const ALERT_BODY_HEADER: &str =
    "The following hosts failed with the following status:\r\nhost,status\r\n";

/// Message printed when a scan is requested but nothing is monitored.
pub const NO_HOSTS_MESSAGE: &str = "No hosts defined";
