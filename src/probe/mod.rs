//! Single-endpoint HTTP probes.
//!
//! A probe issues one GET and reports either the response status (any code)
//! or a transport failure. The response body is never read.

use std::future::Future;
use std::sync::Arc;

use crate::error_handling::{categorize_reqwest_error, ProbeErrorKind};

/// Result of probing one endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered with this HTTP status code.
    Responded(u16),
    /// No HTTP response was received.
    Unreachable {
        /// Failure category
        kind: ProbeErrorKind,
        /// Human-readable error, including its causes
        message: String,
    },
}

impl ProbeOutcome {
    /// The status code, if a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ProbeOutcome::Responded(status) => Some(*status),
            ProbeOutcome::Unreachable { .. } => None,
        }
    }
}

/// Something that can check a single endpoint.
///
/// The scan coordinator runs one probe per host concurrently, so
/// implementations must be shareable across tasks.
pub trait Probe: Send + Sync + 'static {
    /// Probes `endpoint` once. Never retries.
    fn probe(&self, endpoint: &str) -> impl Future<Output = ProbeOutcome> + Send;
}

/// Probes endpoints with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Arc<reqwest::Client>,
}

impl HttpProber {
    /// Wraps an initialized client (see [`crate::initialization::init_client`]).
    pub fn new(client: Arc<reqwest::Client>) -> Self {
        Self { client }
    }
}

impl Probe for HttpProber {
    async fn probe(&self, endpoint: &str) -> ProbeOutcome {
        match self.client.get(endpoint).send().await {
            // Dropping the response discards the body unread
            Ok(response) => ProbeOutcome::Responded(response.status().as_u16()),
            Err(e) => ProbeOutcome::Unreachable {
                kind: categorize_reqwest_error(&e),
                // Alternate form joins the source chain: `outer: inner: innermost`
                message: format!("{:#}", anyhow::Error::from(e)),
            },
        }
    }
}
