//! Link creation, resolution, listing, and soft deletion.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink, Visibility};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::short_url::build_short_url;
use serde_json::json;

/// Insert attempts before giving up on code generation.
///
/// At 48 bits of entropy per code a second collision in a row is practically
/// unreachable, but the bound keeps a pathological store from looping forever.
const MAX_CODE_ATTEMPTS: usize = 5;

/// Service owning the short link lifecycle.
///
/// Creation generates a random code and lets the store's unique constraint
/// arbitrate collisions. Resolution applies access checks in a fixed order:
/// existence, then retirement, then authorization, so error responses never
/// leak whether a private code exists.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    public_host: String,
    public_port: u16,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `public_host` and `public_port` are used to construct the short URLs
    /// handed back to clients.
    pub fn new(repository: Arc<R>, public_host: String, public_port: u16) -> Self {
        Self {
            repository,
            public_host,
            public_port,
        }
    }

    /// Creates a short link owned by `owner_id`.
    ///
    /// The target URL is stored as-is; this service deliberately does not
    /// validate or canonicalize it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `visibility` is not `public` or
    /// `private`. Returns [`AppError::Internal`] if code generation keeps
    /// colliding after [`MAX_CODE_ATTEMPTS`] draws, or on database errors.
    pub async fn shorten(
        &self,
        owner_id: i64,
        target_url: String,
        visibility: &str,
    ) -> Result<Link, AppError> {
        let visibility = Visibility::parse_input(visibility)?;

        for _ in 0..MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                target_url: target_url.clone(),
                visibility,
                owner_id,
            };

            match self.repository.insert(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!("Short code collision, retrying with a fresh draw");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate a unique short code",
            json!({ "reason": "code space exhausted", "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its target URL for `requester`.
    ///
    /// Checks run in a fixed order regardless of who asks:
    ///
    /// 1. unknown code → [`AppError::NotFound`]
    /// 2. retired code → [`AppError::Gone`], even for the owner
    /// 3. private link, non-owner or anonymous → [`AppError::Unauthorized`]
    ///
    /// Existence and retirement outrank authorization so callers learn
    /// "not found"/"gone" for codes that genuinely don't resolve, instead of
    /// an authorization error that would imply the code is taken.
    pub async fn resolve(
        &self,
        code: &str,
        requester: Option<i64>,
    ) -> Result<String, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found", json!({ "code": code })))?;

        if link.deleted {
            return Err(AppError::gone("Gone", json!({ "code": code })));
        }

        if !link.readable_by(requester) {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "code": code }),
            ));
        }

        Ok(link.target_url)
    }

    /// Lists all links owned by `owner_id`, deleted ones included, in
    /// creation order.
    pub async fn list_owned(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.repository.find_by_owner(owner_id).await
    }

    /// Soft-deletes a link owned by `owner_id`.
    ///
    /// Deleting an already-deleted link succeeds again. A code that does not
    /// exist and a code owned by someone else report the same not-found
    /// error, so a caller cannot probe other users' links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches code and owner.
    pub async fn delete(&self, owner_id: i64, code: &str) -> Result<(), AppError> {
        let deleted = self.repository.mark_deleted(code, owner_id).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Short URL not found",
                json!({ "code": code }),
            ));
        }

        Ok(())
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        build_short_url(&self.public_host, self.public_port, code)
    }
}
