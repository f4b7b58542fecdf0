//! Error handling and scan statistics.
//!
//! This module provides:
//! - Error type definitions (configuration, storage, notification)
//! - Categorization of probe transport failures
//! - Thread-safe scan statistics
//!
//! Only configuration errors are fatal. Storage reads fall back to empty
//! collections, probe failures stay local to their endpoint, and notification
//! failures are recorded on the email handler.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::ScanStats;
pub use types::{ConfigError, InitializationError, NotifyError, ProbeErrorKind, StoreError};
