//! DTOs for the liveness probe.

use serde::Serialize;

/// Store reachability report.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub status: &'static str,
}
