//! User entity owning shortened links.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// Users are immutable after registration: there is no update or delete path.
/// `password_hash` is an HMAC-SHA256 digest, never the raw secret.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for registering a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}
