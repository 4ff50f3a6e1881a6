//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

use crate::error::AppError;
use serde_json::json;

/// Read access policy for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Readable by any authenticated identity.
    Public,
    /// Readable by the owner only.
    Private,
}

impl Visibility {
    /// Parses the wire representation (`"public"` / `"private"`).
    ///
    /// Returns `None` for anything else; callers decide whether that is a
    /// validation failure or a corrupt-store condition.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Parses user input, rejecting unrecognized values with a validation error.
    pub fn parse_input(value: &str) -> Result<Self, AppError> {
        Self::parse(value).ok_or_else(|| {
            AppError::bad_request("Invalid visibility value", json!({ "value": value }))
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

/// A shortened URL with its access control metadata.
///
/// `deleted` is the only field that changes after creation, and only ever
/// flips from `false` to `true`. Codes of deleted links are never reassigned.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub visibility: Visibility,
    pub owner_id: i64,
    pub deleted: bool,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if `requester` may read this link.
    ///
    /// Public links are readable by anyone; private links only by their owner.
    /// An absent requester can never read a private link.
    pub fn readable_by(&self, requester: Option<i64>) -> bool {
        match self.visibility {
            Visibility::Public => true,
            Visibility::Private => requester == Some(self.owner_id),
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
    pub visibility: Visibility,
    pub owner_id: i64,
}
