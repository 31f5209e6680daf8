//! Startup orchestration.
//!
//! # Responsibilities
//! - Bind the configured listener
//! - Announce the running service
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener is bound before the banner so the banner reports the real port

use std::net::SocketAddr;

use chrono::{DateTime, Utc};
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Bind a TCP listener for `config`.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, std::io::Error> {
    let listener = TcpListener::bind(config.bind_address()).await?;

    tracing::debug!(
        address = %listener.local_addr()?,
        "Listener bound"
    );

    Ok(listener)
}

/// Log the startup banner.
pub fn announce(addr: SocketAddr, started_at: DateTime<Utc>) {
    tracing::info!("=================================");
    tracing::info!(port = addr.port(), "Server is running on port {}", addr.port());
    tracing::info!("Local: http://localhost:{}/me", addr.port());
    tracing::info!("Started at: {}", started_at.to_rfc3339_opts(chrono::SecondsFormat::Millis, true));
    tracing::info!("=================================");
}
