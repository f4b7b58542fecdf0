// Shared test helpers for scan tests.
//
// Provides a temp-dir backed Config, a prober that routes stored endpoints to
// mock servers, and a mailer double that records every delivery attempt.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use isalive::error_handling::NotifyError;
use isalive::notify::{Mailer, OutgoingEmail};
use isalive::probe::{HttpProber, Probe, ProbeOutcome};
use isalive::{Config, EmailCredentials, LogFormat, LogLevel};
use tempfile::TempDir;

/// Creates a Config rooted in a fresh temporary directory.
pub fn create_test_config() -> (TempDir, Config) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let config = Config::resolve(
        Some(temp.path().join("isalive")),
        LogLevel::Error,
        LogFormat::Plain,
    )
    .expect("Failed to resolve config");
    config.ensure_dir().expect("Failed to create config dir");
    (temp, config)
}

/// Sample credentials pointing at an unused relay.
#[allow(dead_code)] // Used by other test files
pub fn test_credentials() -> EmailCredentials {
    EmailCredentials {
        from_address: "alerts@gmail.com".to_string(),
        password: "app-password".to_string(),
        to_address: "ops@example.com".to_string(),
        smtp_host: "127.0.0.1".to_string(),
        smtp_port: 1,
    }
}

/// Probes real HTTP servers, rewriting stored endpoints to mock server URIs.
///
/// Endpoints without a route are probed as-is.
pub struct RoutingProber {
    inner: HttpProber,
    routes: HashMap<String, String>,
    pub calls: AtomicUsize,
}

impl RoutingProber {
    pub fn new(routes: Vec<(&str, String)>) -> Self {
        Self {
            inner: HttpProber::new(Arc::new(reqwest::Client::new())),
            routes: routes
                .into_iter()
                .map(|(endpoint, uri)| (endpoint.to_string(), uri))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }
}

impl Probe for RoutingProber {
    async fn probe(&self, endpoint: &str) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let target = self
            .routes
            .get(endpoint)
            .map(String::as_str)
            .unwrap_or(endpoint);
        self.inner.probe(target).await
    }
}

/// Records every email it is asked to send.
#[derive(Clone, Default)]
pub struct CountingMailer {
    pub attempts: Arc<AtomicUsize>,
    pub sent: Arc<Mutex<Vec<OutgoingEmail>>>,
}

impl CountingMailer {
    #[allow(dead_code)] // Used by other test files
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    #[allow(dead_code)] // Used by other test files
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for CountingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Fails every delivery with an address error.
#[allow(dead_code)] // Used by other test files
pub struct RejectingMailer;

impl Mailer for RejectingMailer {
    async fn send(&self, _email: &OutgoingEmail) -> Result<(), NotifyError> {
        let source = "nobody"
            .parse::<lettre::Address>()
            .expect_err("address without @ must not parse");
        Err(NotifyError::Address {
            address: "nobody".to_string(),
            source,
        })
    }
}
