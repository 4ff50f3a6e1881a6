//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

fn default_visibility() -> String {
    "private".to_string()
}

/// Individual URL to be shortened.
///
/// `original_url` is deliberately not validated or canonicalized; the service
/// shortens whatever it is given. `visibility` is validated downstream so that
/// an unrecognized value is a 400, not a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ShortenItem {
    pub original_url: String,

    /// `public` or `private`; defaults to `private` when omitted.
    #[serde(default = "default_visibility")]
    pub visibility: String,
}

/// A created short link as returned to the client.
#[derive(Debug, Serialize)]
pub struct ShortUrlItem {
    pub short_id: String,
    pub short_url: String,
    pub original_url: String,
    pub visibility: String,
}

impl ShortUrlItem {
    pub fn from_link(link: &Link, short_url: String) -> Self {
        Self {
            short_id: link.code.clone(),
            short_url,
            original_url: link.target_url.clone(),
            visibility: link.visibility.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_defaults_to_private() {
        let item: ShortenItem =
            serde_json::from_str(r#"{"original_url": "https://a.example"}"#).unwrap();
        assert_eq!(item.visibility, "private");
    }

    #[test]
    fn test_unrecognized_visibility_survives_deserialization() {
        // Rejected later with a 400, not at the serde boundary.
        let item: ShortenItem =
            serde_json::from_str(r#"{"original_url": "https://a.example", "visibility": "hidden"}"#)
                .unwrap();
        assert_eq!(item.visibility, "hidden");
    }
}
