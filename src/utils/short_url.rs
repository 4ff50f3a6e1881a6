//! Short URL formatting.

/// Builds the fully-qualified redirect URL for a short code.
///
/// Pure formatting: `host` and `port` come from configuration and identify
/// where this service is reachable, so the emitted URL points back at the
/// resolution endpoint.
pub fn build_short_url(host: &str, port: u16, code: &str) -> String {
    format!("http://{host}:{port}/api/v1/{code}")
}
