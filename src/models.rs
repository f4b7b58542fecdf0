//! Persisted records: monitored hosts and email credentials.

use serde::{Deserialize, Serialize};

use crate::app::normalize_endpoint;
use crate::config::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT, UNKNOWN_STATUS};

/// A monitored endpoint and the status observed by its last successful probe.
///
/// Serialized as `{"Endpoint": "...", "Status": 200}`. `status` is `0` until a
/// probe receives a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Host {
    /// Normalized URL
    pub endpoint: String,
    /// Last HTTP status code, or `0` if never observed
    pub status: u16,
}

impl Host {
    /// Creates an unscanned host, prepending `https://` when `endpoint` has no
    /// `http://` or `https://` prefix.
    ///
    /// Only call this for user input; stored hosts are deserialized as-is.
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: normalize_endpoint(endpoint),
            status: UNKNOWN_STATUS,
        }
    }
}

/// SMTP account used to send alerts, as written by `configure`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmailCredentials {
    /// Account used to send emails
    pub from_address: String,
    /// Password of the sending account
    pub password: String,
    /// Recipient of alerts
    pub to_address: String,
    /// SMTP submission relay
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP submission port
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
}

fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}
