//! Handler for link shortening endpoint.

use axum::{Extension, Json, extract::State};

use crate::api::dto::shorten::{ShortenItem, ShortUrlItem};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates short links for one or more long URLs, owned by the caller.
///
/// # Endpoint
///
/// `POST /api/v1/shorten`
///
/// # Request Body
///
/// ```json
/// [
///   { "original_url": "https://example.com", "visibility": "public" },
///   { "original_url": "https://example.org" }
/// ]
/// ```
///
/// `visibility` defaults to `private`. Target URLs are not validated.
///
/// # Response
///
/// A list of created links, in request order:
///
/// ```json
/// [
///   {
///     "short_id": "hJkR2n_a",
///     "short_url": "http://127.0.0.1:8080/api/v1/hJkR2n_a",
///     "original_url": "https://example.com",
///     "visibility": "public"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request on the first item with an unrecognized visibility;
/// no partial results are returned.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user_id)): Extension<CurrentUser>,
    Json(items): Json<Vec<ShortenItem>>,
) -> Result<Json<Vec<ShortUrlItem>>, AppError> {
    let mut results = Vec::with_capacity(items.len());

    for item in items {
        let link = state
            .link_service
            .shorten(user_id, item.original_url, &item.visibility)
            .await?;

        let short_url = state.link_service.short_url(&link.code);
        results.push(ShortUrlItem::from_link(&link, short_url));
    }

    Ok(Json(results))
}
