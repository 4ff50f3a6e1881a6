//! DTOs for the ownership listing endpoint.

use serde::Serialize;

use crate::domain::entities::Link;

/// One owned link in the `/user/status` listing.
///
/// The visibility field is serialized as `type` for wire compatibility.
#[derive(Debug, Serialize)]
pub struct StatusItem {
    pub short_id: String,
    pub short_url: String,
    pub original_url: String,
    #[serde(rename = "type")]
    pub visibility: String,
    pub deleted: bool,
}

impl StatusItem {
    pub fn from_link(link: &Link, short_url: String) -> Self {
        Self {
            short_id: link.code.clone(),
            short_url,
            original_url: link.target_url.clone(),
            visibility: link.visibility.as_str().to_string(),
            deleted: link.deleted,
        }
    }
}
