//! HTTP server for park-radar
//!
//! Exposes ranking and classification over a small JSON API.

pub mod routes;
pub mod state;

use crate::config::Config;
use crate::error::{Error, Result};
use routes::create_router;
use state::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Start the HTTP server on the configured address
///
/// Never returns unless the server shuts down.
pub async fn run(config: Config) -> Result<()> {
    run_on(config, None, None).await
}

/// Start the HTTP server, letting `host` / `port` override the config
pub async fn run_on(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    let addr = bind_addr(&config)?;

    info!(
        hotspot_limit = config.ranking.hotspot_limit,
        listing_limit = config.ranking.listing_limit,
        slot_policy = %config.ranking.slot_policy,
        "ranking policy"
    );

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| Error::Server(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Server(format!("Server error: {}", e)))?;

    Ok(())
}

/// Parse the configured `host:port` into a socket address
pub fn bind_addr(config: &Config) -> Result<SocketAddr> {
    config
        .server_addr()
        .parse()
        .map_err(|e| Error::Server(format!("Invalid server address {}: {}", config.server_addr(), e)))
}
