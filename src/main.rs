//! Profile Service
//!
//! Serves a fixed profile with a fresh cat fact on `/me`.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request ID → trace → CORS → log line → handlers
//!                                                               │
//!                                              GET /me          ▼
//!                                          ┌───────────────────────────┐
//!                                          │ timestamp                 │
//!                                          │ resolve_fact (5s bound) ──┼──▶ catfact.ninja
//!                                          │   └─ fallback on failure  │
//!                                          └───────────────────────────┘
//!     Client Response
//!     ◀────────────── JSON body (200 / 404 / 500)
//! ```

use clap::Parser;
use profile_service::config::{ServiceConfig, DEFAULT_PORT};
use profile_service::lifecycle::startup;
use profile_service::observability::logging;
use profile_service::HttpServer;

#[derive(Parser)]
#[command(name = "profile-service")]
#[command(about = "Profile API serving a user record with a cat fact", long_about = None)]
struct Cli {
    /// Port to listen on (all interfaces).
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init()?;

    tracing::info!("profile-service v{} starting", env!("CARGO_PKG_VERSION"));

    let config = ServiceConfig::with_port(cli.port);

    tracing::info!(
        bind_address = %config.listener.bind_address(),
        fact_url = %config.facts.url,
        fact_timeout_ms = config.facts.timeout.as_millis() as u64,
        "Configuration loaded"
    );

    let listener = startup::bind(&config.listener).await?;
    let server = HttpServer::new(config)?;

    startup::announce(listener.local_addr()?, chrono::Utc::now());
    server.run(listener).await?;

    Ok(())
}
