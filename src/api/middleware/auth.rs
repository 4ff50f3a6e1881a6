//! Basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;

use crate::{error::AppError, state::AppState};

/// Identity of the authenticated caller, inserted into request extensions.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser(pub i64);

/// Authenticates requests using Basic credentials from the Authorization header.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(username:password)
/// ```
///
/// On success the verified user id is stored as a [`CurrentUser`] request
/// extension for handlers to read. Handlers never see the raw credentials.
///
/// # Errors
///
/// Returns `401 Unauthorized` (with a `WWW-Authenticate: Basic` challenge) if:
/// - Authorization header is missing or malformed
/// - Credentials don't match a registered user
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((username, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let user_id = st
        .auth_service
        .authenticate(&username, password.as_deref().unwrap_or(""))
        .await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(user_id));

    Ok(next.run(req).await)
}
