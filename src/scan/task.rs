//! Per-host probe task.

use std::sync::Arc;

use log::{debug, warn};
use tokio::sync::Semaphore;

use crate::config::FAILURE_STATUS_THRESHOLD;
use crate::error_handling::{update_error_stats, ScanStats};
use crate::probe::{Probe, ProbeOutcome};

/// Everything one probe task needs. Each task owns its own copy of the
/// endpoint; hosts themselves are only touched after the join.
pub(crate) struct ProbeTaskParams<P> {
    pub prober: Arc<P>,
    pub endpoint: String,
    pub semaphore: Option<Arc<Semaphore>>,
    pub stats: Arc<ScanStats>,
}

/// Probes one endpoint. Spawned once per host.
///
/// Transport failures are logged here; their messages travel back in the
/// outcome and are written to the report after the join.
pub(crate) async fn probe_host_task<P: Probe>(params: ProbeTaskParams<P>) -> ProbeOutcome {
    let ProbeTaskParams {
        prober,
        endpoint,
        semaphore,
        stats,
    } = params;

    // Hold the permit until the probe completes
    let _permit = match semaphore {
        Some(semaphore) => semaphore.acquire_owned().await.ok(),
        None => None,
    };

    let outcome = prober.probe(&endpoint).await;
    match &outcome {
        ProbeOutcome::Responded(status) if *status >= FAILURE_STATUS_THRESHOLD => {
            debug!("{endpoint} answered {status}");
            stats.increment_failing();
        }
        ProbeOutcome::Responded(status) => {
            debug!("{endpoint} answered {status}");
            stats.increment_healthy();
        }
        ProbeOutcome::Unreachable { kind, message } => {
            warn!("{endpoint} unreachable ({kind}): {message}");
            update_error_stats(&stats, *kind);
        }
    }
    outcome
}
