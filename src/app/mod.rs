//! Endpoint normalization, report output and statistics printing.

pub mod report;
pub mod statistics;
pub mod url;

// Re-export public API
pub use report::write_report;
pub use statistics::print_scan_statistics;
pub use url::normalize_endpoint;
