//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ProbeErrorKind, ScanStats};

/// Logs a one-line summary of the scan followed by transport failure counts.
pub fn print_scan_statistics(stats: &ScanStats, total: usize, elapsed_seconds: f64) {
    info!(
        "Scanned {} endpoint{} ({} healthy, {} failing, {} unreachable) in {:.1}s",
        total,
        if total == 1 { "" } else { "s" },
        stats.healthy(),
        stats.failing(),
        stats.total_errors(),
        elapsed_seconds
    );

    let total_errors = stats.total_errors();
    if total_errors > 0 {
        info!("Error Counts ({} total):", total_errors);
        for kind in ProbeErrorKind::iter() {
            let count = stats.get_error_count(kind);
            if count > 0 {
                info!("   {}: {}", kind, count);
            }
        }
    }
}
