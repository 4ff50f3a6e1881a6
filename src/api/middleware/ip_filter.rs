//! IP deny-list middleware.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::{IpAddr, SocketAddr};

use crate::{error::AppError, state::AppState};

/// Returns true if `ip` is on the deny list.
pub fn is_denied(ip: IpAddr, deny_list: &[IpAddr]) -> bool {
    deny_list.contains(&ip)
}

/// Rejects requests from deny-listed client IPs before any handling.
///
/// The client IP is taken from the peer socket address. The check is opaque
/// to the rest of the service; handlers never see filtered requests.
///
/// # Errors
///
/// Returns `403 Forbidden` for deny-listed origins.
pub async fn layer(
    State(st): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_denied(addr.ip(), &st.ip_deny_list) {
        tracing::warn!(ip = %addr.ip(), "Rejected deny-listed client");
        return Err(AppError::forbidden("Forbidden", serde_json::json!({})));
    }

    Ok(next.run(req).await)
}
