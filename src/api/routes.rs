//! API route configuration.

use crate::api::handlers::{
    delete_link_handler, ping_handler, register_handler, resolve_handler, shorten_handler,
    status_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that require no credentials.
///
/// # Endpoints
///
/// - `POST /register` - Create an account
/// - `GET  /ping`     - Store reachability probe
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/ping", get(ping_handler))
}

/// Routes protected by Basic authentication.
///
/// # Endpoints
///
/// - `POST   /shorten`     - Create short links (batch-capable)
/// - `GET    /user/status` - List the caller's links, deleted included
/// - `GET    /{code}`      - Resolve a short code (307 redirect)
/// - `DELETE /{code}`      - Soft-delete a link
///
/// Static segments (`/shorten`, `/user/status`) take precedence over the
/// `/{code}` capture, so codes never shadow system endpoints.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/user/status", get(status_handler))
        .route("/{code}", get(resolve_handler).delete(delete_link_handler))
}
