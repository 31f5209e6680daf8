//! Local stand-in for the cat fact API.
//!
//! Run with `cargo run --example mock_fact_service`. The service binary always
//! talks to the real API; use this from code by setting
//! `ServiceConfig.facts.url` to `http://127.0.0.1:8081/fact` (or `/broken`).

use axum::{routing::get, Json, Router};
use serde_json::json;
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        .route("/fact", get(|| async { Json(json!({"fact": "Cats sleep 70% of their lives.", "length": 30})) }))
        .route("/broken", get(|| async { (axum::http::StatusCode::BAD_GATEWAY, "upstream down") }));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8081));
    println!("Mock fact service listening on http://{}/fact", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
