//! Handler for short code resolution.

use axum::{
    Extension,
    extract::{Path, State},
    response::Redirect,
};

use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves a short code and redirects to its target URL.
///
/// # Endpoint
///
/// `GET /api/v1/{code}`
///
/// Checks run in a fixed order: existence, then retirement, then
/// authorization. Public links resolve for any authenticated identity;
/// private links only for their owner.
///
/// # Errors
///
/// - 404 Not Found - unknown code
/// - 410 Gone - retired code, even for the owner
/// - 401 Unauthorized - private link, caller is not the owner
pub async fn resolve_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Redirect, AppError> {
    let target_url = state.link_service.resolve(&code, Some(user_id)).await?;

    Ok(Redirect::temporary(&target_url))
}
