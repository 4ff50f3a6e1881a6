//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the link registry.
///
/// The store enforces global uniqueness of `code` for all links ever created,
/// soft-deleted ones included. Each mutation is a single atomic statement.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists.
    /// Returns [`AppError::Internal`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code, soft-deleted links included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists all links owned by `owner_id`, in creation order (ascending).
    ///
    /// Soft-deleted links are included; ownership listings are an audit view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError>;

    /// Marks a link deleted, matching on code **and** owner.
    ///
    /// Returns `Ok(true)` if a row matched, `Ok(false)` otherwise. A
    /// nonexistent code and an ownership mismatch are indistinguishable here.
    /// The current `deleted` flag is not checked, so marking an
    /// already-deleted link succeeds again.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn mark_deleted(&self, code: &str, owner_id: i64) -> Result<bool, AppError>;
}
