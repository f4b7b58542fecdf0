//! End-to-end scan command: load, probe, report, persist, alert.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::app::{print_scan_statistics, write_report};
use crate::config::{Config, ScanOptions, NO_HOSTS_MESSAGE};
use crate::error_handling::ScanStats;
use crate::initialization::init_client;
use crate::models::{EmailCredentials, Host};
use crate::notify::{EmailHandler, EmailStatus, Mailer, SmtpMailer};
use crate::probe::{HttpProber, Probe};
use crate::storage::{CredentialStore, HostStore};

use super::{scan_hosts, ScanSummary};

/// Results of a scan run.
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Hosts after the scan, in stored order
    pub hosts: Vec<Host>,
    /// Failing hosts (status >= 300 or unreachable), in stored order, with the
    /// status seen by this scan (`0` when unreachable)
    pub failing: Vec<Host>,
    /// Hosts that did not respond at all
    pub unreachable: usize,
    /// Alert email status; `None` when no alert was attempted
    pub email_status: Option<EmailStatus>,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

impl ScanReport {
    fn empty() -> Self {
        Self {
            hosts: Vec::new(),
            failing: Vec::new(),
            unreachable: 0,
            email_status: None,
            elapsed_seconds: 0.0,
        }
    }
}

/// Runs a scan with the real HTTP prober and SMTP mailer, reporting to stdout.
///
/// # Errors
///
/// Returns an error only if the HTTP client cannot be built. Probe, storage and
/// email failures are reported and do not fail the run.
pub async fn run_scan(config: &Config, options: &ScanOptions) -> Result<ScanReport> {
    let client = init_client(options).context("Failed to initialize HTTP client")?;
    let prober = Arc::new(HttpProber::new(client));
    let mut out = std::io::stdout();
    Ok(run_scan_with(config, options, prober, SmtpMailer::new, &mut out).await)
}

/// Runs a scan with an injected prober and mailer, writing the report to `out`.
///
/// An empty host list prints `No hosts defined` and returns without any
/// network activity. Otherwise every host is probed, transport errors and then
/// the report are written in stored order, updated statuses are saved, and
/// when `options.alert` is set and any host failed, a single alert email is
/// sent if credentials are configured. A failed send is reported to `out`.
pub async fn run_scan_with<P, M, F, W>(
    config: &Config,
    options: &ScanOptions,
    prober: Arc<P>,
    build_mailer: F,
    out: &mut W,
) -> ScanReport
where
    P: Probe,
    M: Mailer,
    F: FnOnce(&EmailCredentials) -> M,
    W: Write,
{
    let store = HostStore::from_config(config);
    let mut hosts = store.load();
    if hosts.is_empty() {
        if let Err(e) = writeln!(out, "{NO_HOSTS_MESSAGE}") {
            warn!("Failed to write scan report: {e}");
        }
        return ScanReport::empty();
    }

    info!("Scanning {} endpoint(s)", hosts.len());
    let start_time = Instant::now();
    let stats = Arc::new(ScanStats::new());
    let summary = scan_hosts(prober, &mut hosts, options.max_concurrency, Arc::clone(&stats)).await;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();

    if let Err(e) = write_scan_output(out, &summary, &hosts) {
        warn!("Failed to write scan report: {e}");
    }
    print_scan_statistics(&stats, hosts.len(), elapsed_seconds);
    info!(
        "{} of {} endpoint(s) failing",
        summary.failing_count(),
        hosts.len()
    );

    if let Err(e) = store.save(&hosts) {
        warn!("Failed to save scan results: {e}");
    }

    let failing: Vec<Host> = summary.failing().map(|r| r.observed()).collect();
    let email_status = if options.alert && !failing.is_empty() {
        send_alert(config, &failing, build_mailer, out).await
    } else {
        None
    };

    ScanReport {
        hosts,
        failing,
        unreachable: summary.unreachable_count(),
        email_status,
        elapsed_seconds,
    }
}

/// Transport errors first, then one `<endpoint> <status>` line per host.
fn write_scan_output<W: Write>(
    out: &mut W,
    summary: &ScanSummary,
    hosts: &[Host],
) -> io::Result<()> {
    for message in summary.results.iter().filter_map(|r| r.transport_error()) {
        writeln!(out, "{message}")?;
    }
    write_report(out, hosts)
}

async fn send_alert<M, F, W>(
    config: &Config,
    failing: &[Host],
    build_mailer: F,
    out: &mut W,
) -> Option<EmailStatus>
where
    M: Mailer,
    F: FnOnce(&EmailCredentials) -> M,
    W: Write,
{
    let Some(credentials) = CredentialStore::from_config(config).load() else {
        info!("No email credentials configured; skipping alert");
        return None;
    };

    let mailer = build_mailer(&credentials);
    let mut email = EmailHandler::new(credentials, mailer);
    for host in failing {
        email.append_failure(host);
    }
    if email.send().await {
        info!("Alert sent for {} failing endpoint(s)", failing.len());
    } else if let Some(e) = email.last_error() {
        if let Err(write_err) = writeln!(out, "Unable to send email due to {e}") {
            warn!("Failed to write scan report: {write_err}");
        }
    }
    Some(email.status())
}
