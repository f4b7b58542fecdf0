//! Endpoint normalization.

use log::warn;

/// Normalizes a user-supplied endpoint.
///
/// Adds an `https://` prefix when the input starts with neither `http://` nor
/// `https://`. Idempotent. Inputs that still do not parse as a URL are kept
/// (a warning is logged); the probe will report them as unreachable.
pub fn normalize_endpoint(endpoint: &str) -> String {
    let normalized = if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        format!("https://{endpoint}")
    } else {
        endpoint.to_string()
    };

    if let Err(e) = url::Url::parse(&normalized) {
        warn!("Endpoint {normalized} is not a valid URL ({e}); storing it anyway");
    }

    normalized
}
