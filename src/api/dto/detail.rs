//! Generic confirmation response.

use serde::Serialize;

/// Confirmation payload: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: &'static str,
}
