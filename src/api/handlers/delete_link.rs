//! Handler for link soft deletion.

use axum::{
    Extension,
    extract::{Path, State},
    Json,
};

use crate::api::dto::detail::DetailResponse;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Soft-deletes a link owned by the caller.
///
/// # Endpoint
///
/// `DELETE /api/v1/{code}`
///
/// # Behavior
///
/// - The record is **not** removed; its `deleted` flag is set. The code stays
///   reserved forever and subsequent resolutions return 410 Gone.
/// - Deleting an already-deleted link succeeds again.
///
/// # Errors
///
/// Returns 404 Not Found if the code doesn't exist **or** belongs to another
/// user; the two cases are intentionally indistinguishable.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<DetailResponse>, AppError> {
    state.link_service.delete(user_id, &code).await?;

    tracing::info!(code = %code, "Link soft-deleted");

    Ok(Json(DetailResponse {
        detail: "Short URL has been marked as deleted",
    }))
}
