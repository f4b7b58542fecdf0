//! Error categorization.

use super::stats::ScanStats;
use super::types::ProbeErrorKind;

/// Categorizes a transport-level `reqwest::Error` into a `ProbeErrorKind`.
///
/// Probes never call `error_for_status`, so status codes are not inspected
/// here; only the error type predicates are.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ProbeErrorKind {
    if error.is_builder() {
        ProbeErrorKind::Builder
    } else if error.is_timeout() {
        ProbeErrorKind::Timeout
    } else if error.is_connect() {
        ProbeErrorKind::Connect
    } else if error.is_redirect() {
        ProbeErrorKind::Redirect
    } else if error.is_request() {
        ProbeErrorKind::Request
    } else {
        ProbeErrorKind::Other
    }
}

/// Records a probe failure in the scan statistics.
pub fn update_error_stats(stats: &ScanStats, kind: ProbeErrorKind) {
    stats.increment_error(kind);
}
