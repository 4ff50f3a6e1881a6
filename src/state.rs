//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::net::IpAddr;
use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::{PgLinkRepository, PgUserRepository};

/// Shared state for all request handlers.
///
/// Everything is behind `Arc`, so cloning per request is cheap.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    /// Pool handle kept for the liveness probe.
    pub pool: Arc<PgPool>,
    /// Client IPs rejected with 403 before any handling.
    pub ip_deny_list: Arc<Vec<IpAddr>>,
}
