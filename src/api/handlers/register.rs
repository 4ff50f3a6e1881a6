//! Handler for user registration.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::detail::DetailResponse;
use crate::api::dto::register::RegisterRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/v1/register`
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
/// Returns 409 Conflict if the username is already taken.
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<DetailResponse>, AppError> {
    payload.validate()?;

    state
        .auth_service
        .register(&payload.username, &payload.password)
        .await?;

    tracing::info!(username = %payload.username, "User registered");

    Ok(Json(DetailResponse {
        detail: "User registered successfully",
    }))
}
