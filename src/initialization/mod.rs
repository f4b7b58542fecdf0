//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - Concurrency limiter for bounded scans

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore bounding concurrent probes.
///
/// Returns `None` for `count == 0`, which means one probe per endpoint with no
/// cap.
pub fn init_semaphore(count: usize) -> Option<Arc<Semaphore>> {
    (count > 0).then(|| Arc::new(Semaphore::new(count)))
}
