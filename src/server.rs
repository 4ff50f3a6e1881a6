//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Repositories and services
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Migrations applied");

    let pool = Arc::new(pool);
    let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
    let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        config.credential_signing_secret.clone(),
    ));
    let link_service = Arc::new(LinkService::new(
        link_repository,
        config.public_host.clone(),
        config.public_port,
    ));

    let state = AppState {
        auth_service,
        link_service,
        pool,
        ip_deny_list: Arc::new(config.ip_deny_list.clone()),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
