//! HTTP lookup endpoint.
//!
//! Provides one endpoint:
//! - `/api/lookup` - JSON [`LookupResult`](crate::models::LookupResult) of a character
//!
//! Each request runs a full lookup; nothing is cached server-side, the
//! `Expires` header lets clients and proxies do that.

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

pub use handlers::{expires_header, identity_from_query, lookup_handler};
pub use types::{ErrorResponse, LookupQuery, ServerState};

pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .route("/api/lookup", get(lookup_handler))
        .with_state(state)
}

/// Serves the lookup endpoint on an already bound listener until it fails.
pub async fn serve(listener: TcpListener, state: ServerState) -> Result<(), anyhow::Error> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Lookup server listening on http://{}/", addr);
        log::info!("  - Lookup: http://{}/api/lookup?region=&realm=&character=", addr);
    }

    axum::serve(listener, build_router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Lookup server error: {}", e))?;

    Ok(())
}

/// Binds `addr` and serves the lookup endpoint.
pub async fn start_server(addr: SocketAddr, state: ServerState) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind lookup server to {}: {}", addr, e))?;
    serve(listener, state).await
}
