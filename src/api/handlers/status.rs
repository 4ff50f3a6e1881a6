//! Handler for the ownership listing endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::status::StatusItem;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links owned by the caller.
///
/// # Endpoint
///
/// `GET /api/v1/user/status`
///
/// Links are returned in creation order. Soft-deleted links are included;
/// the listing doubles as an audit view of everything the user ever created.
pub async fn status_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
) -> Result<Json<Vec<StatusItem>>, AppError> {
    let links = state.link_service.list_owned(user_id).await?;

    let items = links
        .iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            StatusItem::from_link(link, short_url)
        })
        .collect();

    Ok(Json(items))
}
