//! Scan statistics tracking.
//!
//! Thread-safe counters for probe outcomes, updated from concurrently running
//! probe tasks.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ProbeErrorKind;

/// Thread-safe scan statistics tracker.
///
/// Counts responses (split into healthy and failing by status) and transport
/// failures by kind. All counters start at zero; share across tasks with `Arc`.
pub struct ScanStats {
    errors: HashMap<ProbeErrorKind, AtomicUsize>,
    healthy: AtomicUsize,
    failing: AtomicUsize,
}

impl ScanStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ProbeErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }

        ScanStats {
            errors,
            healthy: AtomicUsize::new(0),
            failing: AtomicUsize::new(0),
        }
    }

    /// Increment the counter for a transport failure kind.
    pub fn increment_error(&self, kind: ProbeErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map",
                kind
            );
        }
    }

    /// Record a response below the failure threshold.
    pub fn increment_healthy(&self) {
        self.healthy.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a response at or above the failure threshold.
    pub fn increment_failing(&self) {
        self.failing.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the count for a transport failure kind.
    pub fn get_error_count(&self, kind: ProbeErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total transport failures across all kinds.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }

    /// Responses below the failure threshold.
    pub fn healthy(&self) -> usize {
        self.healthy.load(Ordering::SeqCst)
    }

    /// Responses at or above the failure threshold.
    pub fn failing(&self) -> usize {
        self.failing.load(Ordering::SeqCst)
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
