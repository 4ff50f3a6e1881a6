#![allow(dead_code)]

use axum::http::HeaderValue;
use axum::{Router, middleware};
use base64::Engine as _;
use sqlx::PgPool;
use std::sync::Arc;

use urlcut::api::middleware::auth;
use urlcut::api::routes;
use urlcut::application::services::{AuthService, LinkService};
use urlcut::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use urlcut::state::AppState;

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repo = Arc::new(PgLinkRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repo,
        TEST_SIGNING_SECRET.to_string(),
    ));
    let link_service = Arc::new(LinkService::new(link_repo, "127.0.0.1".to_string(), 8080));

    AppState {
        auth_service,
        link_service,
        pool,
        ip_deny_list: Arc::new(Vec::new()),
    }
}

/// Builds the `/api/v1` router with the real Basic-auth middleware, but
/// without the connection-bound layers (IP filter, rate limiting) that need a
/// peer socket address.
pub fn test_router(state: AppState) -> Router {
    let api_router = routes::public_routes().merge(
        routes::protected_routes()
            .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer)),
    );

    Router::new().nest("/api/v1", api_router).with_state(state)
}

/// `Authorization: Basic ...` header value for the given credentials.
pub fn basic_auth(username: &str, password: &str) -> HeaderValue {
    let encoded =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    HeaderValue::from_str(&format!("Basic {encoded}")).unwrap()
}

/// Registers a user directly through the service, returning its id.
pub async fn register_user(state: &AppState, username: &str, password: &str) -> i64 {
    state
        .auth_service
        .register(username, password)
        .await
        .unwrap()
        .id
}

/// Inserts a bare user row for repository tests that don't exercise auth.
pub async fn create_user_row(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, password_hash) VALUES ($1, 'x') RETURNING id",
    )
    .bind(username)
    .fetch_one(pool)
    .await
    .unwrap()
}
