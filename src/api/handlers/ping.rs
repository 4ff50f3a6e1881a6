//! Handler for the liveness probe.

use axum::{Json, extract::State};

use crate::api::dto::health::PingResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Reports whether the database is reachable.
///
/// # Endpoint
///
/// `GET /api/v1/ping`
///
/// # Errors
///
/// Returns 500 Internal Server Error when the store cannot be reached.
pub async fn ping_handler(State(state): State<AppState>) -> Result<Json<PingResponse>, AppError> {
    sqlx::query("SELECT 1")
        .execute(state.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Database ping failed");
            AppError::internal("Database is not accessible", serde_json::json!({}))
        })?;

    Ok(Json(PingResponse {
        status: "Database is accessible",
    }))
}
