//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ScanOptions;
use crate::error_handling::InitializationError;
use reqwest::ClientBuilder;

/// Initializes the HTTP client used for probes.
///
/// The client keeps reqwest's defaults (redirect policy, TLS verification, no
/// overall timeout) unless `timeout_seconds` is set in the scan options.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(options: &ScanOptions) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new().user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
    ));
    if let Some(secs) = options.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(Arc::new(builder.build()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_without_timeout() {
        let options = ScanOptions::default();
        assert!(init_client(&options).is_ok());
    }

    #[test]
    fn test_init_client_with_timeout() {
        let options = ScanOptions {
            timeout_seconds: Some(5),
            ..ScanOptions::default()
        };
        assert!(init_client(&options).is_ok());
    }

    #[test]
    fn test_client_error_converts_to_initialization_error() {
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .expect_err("relative URL should not build");
        let err = InitializationError::from(err);
        assert!(matches!(err, InitializationError::HttpClientError(_)));
        assert!(err
            .to_string()
            .starts_with("HTTP client initialization error"));
    }
}
