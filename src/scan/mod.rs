//! Scan coordination.
//!
//! [`scan_hosts`] fans out one probe task per host, waits for all of them and
//! writes the observed statuses back in list order. [`run_scan`] wraps it with
//! loading, reporting, persistence and alerting.

mod run;
mod task;

use std::sync::Arc;

use futures::stream::{FuturesUnordered, StreamExt};
use log::warn;

use crate::config::{FAILURE_STATUS_THRESHOLD, UNKNOWN_STATUS};
use crate::error_handling::{ProbeErrorKind, ScanStats};
use crate::initialization::init_semaphore;
use crate::models::Host;
use crate::probe::{Probe, ProbeOutcome};

use task::{probe_host_task, ProbeTaskParams};

pub use run::{run_scan, run_scan_with, ScanReport};

/// Outcome of one host in a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostResult {
    /// The host after the scan; `status` is unchanged if the probe got no response
    pub host: Host,
    /// What the probe observed
    pub outcome: ProbeOutcome,
}

impl HostResult {
    /// A host fails when it answered with a status of 300 or more, or did not
    /// answer at all.
    pub fn is_failing(&self) -> bool {
        match self.outcome {
            ProbeOutcome::Responded(status) => status >= FAILURE_STATUS_THRESHOLD,
            ProbeOutcome::Unreachable { .. } => true,
        }
    }

    /// Whether the probe received no HTTP response.
    pub fn is_unreachable(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Unreachable { .. })
    }

    /// The host with the status seen by this scan: `0` when nothing answered,
    /// regardless of what was stored before.
    pub fn observed(&self) -> Host {
        Host {
            endpoint: self.host.endpoint.clone(),
            status: self.outcome.status().unwrap_or(UNKNOWN_STATUS),
        }
    }

    /// Transport error message, if the probe got no response.
    pub fn transport_error(&self) -> Option<&str> {
        match &self.outcome {
            ProbeOutcome::Unreachable { message, .. } => Some(message),
            ProbeOutcome::Responded(_) => None,
        }
    }
}

/// Per-host results of a scan, in the order the hosts were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// One entry per host, input order
    pub results: Vec<HostResult>,
}

impl ScanSummary {
    /// Failing hosts, in input order.
    pub fn failing(&self) -> impl Iterator<Item = &HostResult> {
        self.results.iter().filter(|r| r.is_failing())
    }

    /// Number of failing hosts.
    pub fn failing_count(&self) -> usize {
        self.failing().count()
    }

    /// Number of hosts that did not respond.
    pub fn unreachable_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_unreachable()).count()
    }
}

/// Probes every host concurrently and updates statuses in place.
///
/// One task is spawned per host. With `max_concurrency == 0` all probes run at
/// once; otherwise at most `max_concurrency` are in flight. The function
/// returns only after every task has finished. Completion order does not
/// affect the result order.
///
/// A host whose probe got no response keeps its previous status.
pub async fn scan_hosts<P: Probe>(
    prober: Arc<P>,
    hosts: &mut [Host],
    max_concurrency: usize,
    stats: Arc<ScanStats>,
) -> ScanSummary {
    let semaphore = init_semaphore(max_concurrency);
    let mut tasks = FuturesUnordered::new();

    for (index, host) in hosts.iter().enumerate() {
        let handle = tokio::spawn(probe_host_task(ProbeTaskParams {
            prober: Arc::clone(&prober),
            endpoint: host.endpoint.clone(),
            semaphore: semaphore.clone(),
            stats: Arc::clone(&stats),
        }));
        tasks.push(async move { (index, handle.await) });
    }

    let mut outcomes: Vec<Option<ProbeOutcome>> = (0..hosts.len()).map(|_| None).collect();
    while let Some((index, joined)) = tasks.next().await {
        let outcome = joined.unwrap_or_else(|join_error| {
            warn!("Probe task panicked: {:?}", join_error);
            stats.increment_error(ProbeErrorKind::Task);
            task_failure(join_error.to_string())
        });
        outcomes[index] = Some(outcome);
    }

    let results = hosts
        .iter_mut()
        .zip(outcomes)
        .map(|(host, outcome)| {
            let outcome = outcome.unwrap_or_else(|| task_failure("probe did not run".into()));
            if let ProbeOutcome::Responded(status) = outcome {
                host.status = status;
            }
            HostResult {
                host: host.clone(),
                outcome,
            }
        })
        .collect();

    ScanSummary { results }
}

fn task_failure(message: String) -> ProbeOutcome {
    ProbeOutcome::Unreachable {
        kind: ProbeErrorKind::Task,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Answers from a fixed table after a per-endpoint delay.
    struct TableProber {
        table: HashMap<String, (Duration, ProbeOutcome)>,
        calls: AtomicUsize,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl TableProber {
        fn new(entries: Vec<(&str, u64, ProbeOutcome)>) -> Self {
            Self {
                table: entries
                    .into_iter()
                    .map(|(e, ms, o)| (e.to_string(), (Duration::from_millis(ms), o)))
                    .collect(),
                calls: AtomicUsize::new(0),
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }
    }

    impl Probe for TableProber {
        async fn probe(&self, endpoint: &str) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);

            let (delay, outcome) = self.table[endpoint].clone();
            tokio::time::sleep(delay).await;

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            outcome
        }
    }

    struct PanickingProber;

    impl Probe for PanickingProber {
        async fn probe(&self, endpoint: &str) -> ProbeOutcome {
            if endpoint.contains("boom") {
                panic!("probe exploded");
            }
            ProbeOutcome::Responded(200)
        }
    }

    fn host(endpoint: &str, status: u16) -> Host {
        Host {
            endpoint: endpoint.to_string(),
            status,
        }
    }

    fn refused() -> ProbeOutcome {
        ProbeOutcome::Unreachable {
            kind: ProbeErrorKind::Connect,
            message: "connection refused".into(),
        }
    }

    #[tokio::test]
    async fn test_results_follow_input_order_not_completion_order() {
        // The first host is the slowest, the last the fastest
        let prober = Arc::new(TableProber::new(vec![
            ("https://a.test", 150, ProbeOutcome::Responded(200)),
            ("https://b.test", 75, ProbeOutcome::Responded(503)),
            ("https://c.test", 0, ProbeOutcome::Responded(301)),
        ]));
        let mut hosts = vec![
            host("https://a.test", 0),
            host("https://b.test", 0),
            host("https://c.test", 0),
        ];

        let summary = scan_hosts(prober, &mut hosts, 0, Arc::new(ScanStats::new())).await;

        let statuses: Vec<_> = hosts.iter().map(|h| h.status).collect();
        assert_eq!(statuses, [200, 503, 301]);
        let endpoints: Vec<_> = summary.results.iter().map(|r| r.host.endpoint.as_str()).collect();
        assert_eq!(endpoints, ["https://a.test", "https://b.test", "https://c.test"]);
    }

    #[tokio::test]
    async fn test_probes_run_concurrently() {
        let prober = Arc::new(TableProber::new(
            (0..5)
                .map(|_| ("https://x.test", 100, ProbeOutcome::Responded(200)))
                .collect(),
        ));
        let mut hosts: Vec<_> = (0..5).map(|_| host("https://x.test", 0)).collect();

        scan_hosts(Arc::clone(&prober), &mut hosts, 0, Arc::new(ScanStats::new())).await;

        assert_eq!(prober.calls.load(Ordering::SeqCst), 5);
        assert_eq!(prober.max_in_flight.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_max_concurrency_bounds_in_flight_probes() {
        let prober = Arc::new(TableProber::new(vec![(
            "https://x.test",
            30,
            ProbeOutcome::Responded(200),
        )]));
        let mut hosts: Vec<_> = (0..8).map(|_| host("https://x.test", 0)).collect();

        scan_hosts(Arc::clone(&prober), &mut hosts, 2, Arc::new(ScanStats::new())).await;

        assert_eq!(prober.calls.load(Ordering::SeqCst), 8);
        assert!(prober.max_in_flight.load(Ordering::SeqCst) <= 2);
    }

    #[tokio::test]
    async fn test_failure_threshold() {
        let prober = Arc::new(TableProber::new(vec![
            ("https://ok.test", 0, ProbeOutcome::Responded(200)),
            ("https://299.test", 0, ProbeOutcome::Responded(299)),
            ("https://300.test", 0, ProbeOutcome::Responded(300)),
            ("https://404.test", 0, ProbeOutcome::Responded(404)),
            ("https://503.test", 0, ProbeOutcome::Responded(503)),
        ]));
        let mut hosts = vec![
            host("https://ok.test", 0),
            host("https://299.test", 0),
            host("https://300.test", 0),
            host("https://404.test", 0),
            host("https://503.test", 0),
        ];
        let stats = Arc::new(ScanStats::new());

        let summary = scan_hosts(prober, &mut hosts, 0, Arc::clone(&stats)).await;

        let failing: Vec<_> = summary.failing().map(|r| r.host.endpoint.as_str()).collect();
        assert_eq!(failing, ["https://300.test", "https://404.test", "https://503.test"]);
        assert_eq!(stats.healthy(), 2);
        assert_eq!(stats.failing(), 3);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_previous_status_and_fails() {
        let prober = Arc::new(TableProber::new(vec![
            ("https://new.test", 0, refused()),
            ("https://old.test", 0, refused()),
            ("https://ok.test", 0, ProbeOutcome::Responded(204)),
        ]));
        let mut hosts = vec![
            host("https://new.test", 0),
            host("https://old.test", 200),
            host("https://ok.test", 0),
        ];
        let stats = Arc::new(ScanStats::new());

        let summary = scan_hosts(prober, &mut hosts, 0, Arc::clone(&stats)).await;

        assert_eq!(hosts[0].status, 0);
        assert_eq!(hosts[1].status, 200);
        assert_eq!(hosts[2].status, 204);
        // A stale 200 does not hide an unreachable endpoint
        assert!(summary.results[1].is_failing());
        assert!(!summary.results[2].is_failing());
        assert_eq!(summary.failing_count(), 2);
        assert_eq!(summary.unreachable_count(), 2);
        assert_eq!(stats.get_error_count(ProbeErrorKind::Connect), 2);
    }

    #[test]
    fn test_observed_status_ignores_stale_value() {
        let unreachable = HostResult {
            host: host("https://old.test", 200),
            outcome: refused(),
        };
        assert_eq!(unreachable.observed(), host("https://old.test", 0));
        assert_eq!(unreachable.transport_error(), Some("connection refused"));

        let answered = HostResult {
            host: host("https://ok.test", 503),
            outcome: ProbeOutcome::Responded(503),
        };
        assert_eq!(answered.observed(), host("https://ok.test", 503));
        assert_eq!(answered.transport_error(), None);
    }

    #[tokio::test]
    async fn test_panicking_probe_is_isolated() {
        let mut hosts = vec![
            host("https://fine.test", 0),
            host("https://boom.test", 0),
            host("https://also-fine.test", 0),
        ];
        let stats = Arc::new(ScanStats::new());

        let summary = scan_hosts(Arc::new(PanickingProber), &mut hosts, 0, Arc::clone(&stats)).await;

        assert_eq!(hosts[0].status, 200);
        assert_eq!(hosts[1].status, 0);
        assert_eq!(hosts[2].status, 200);
        assert!(summary.results[1].is_unreachable());
        assert_eq!(stats.get_error_count(ProbeErrorKind::Task), 1);
    }

    #[tokio::test]
    async fn test_empty_list_spawns_nothing() {
        let prober = Arc::new(TableProber::new(vec![]));
        let mut hosts: Vec<Host> = Vec::new();

        let summary = scan_hosts(Arc::clone(&prober), &mut hosts, 0, Arc::new(ScanStats::new())).await;

        assert!(summary.results.is_empty());
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }
}
