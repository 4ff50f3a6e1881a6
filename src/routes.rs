//! Top-level router configuration.
//!
//! # Route Structure
//!
//! All endpoints live under `/api/v1`:
//!
//! - `POST   /api/v1/register`    - Registration (no credentials)
//! - `GET    /api/v1/ping`        - Liveness probe (no credentials)
//! - `POST   /api/v1/shorten`     - Create short links (Basic auth)
//! - `GET    /api/v1/user/status` - Ownership listing (Basic auth)
//! - `GET    /api/v1/{code}`      - Resolution redirect (Basic auth)
//! - `DELETE /api/v1/{code}`      - Soft delete (Basic auth)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **IP filter** - Deny-listed origins rejected with 403 before anything else
//! - **Rate limiting** - Per-IP token bucket
//! - **Authentication** - Basic credentials on protected routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{auth, ip_filter, rate_limit, tracing};
use crate::state::AppState;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes()
        .merge(
            api::routes::protected_routes()
                .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            ip_filter::layer,
        ))
        .layer(rate_limit::layer());

    let router = Router::new()
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
