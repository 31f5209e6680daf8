//! Shared utilities for integration and load testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{http::StatusCode, response::IntoResponse, Router};
use profile_service::config::ServiceConfig;
use profile_service::HttpServer;
use tokio::net::TcpListener;

/// Start a programmable mock upstream on an ephemeral port.
///
/// Every request, whatever its path, is answered with the `(status, body)`
/// produced by `f`.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let f = Arc::new(f);
    let app = Router::new().fallback(move || {
        let f = f.clone();
        async move {
            let (status, body) = f().await;
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::OK);
            (status, [("content-type", "application/json")], body).into_response()
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    addr
}

/// Start a mock upstream that always returns the same JSON body with 200.
#[allow(dead_code)]
pub async fn start_mock_backend(body: &'static str) -> SocketAddr {
    start_programmable_backend(move || async move { (200, body.to_string()) }).await
}

/// An address with nothing listening on it.
#[allow(dead_code)]
pub fn unused_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Start the service on an ephemeral port, fetching facts from `fact_url`.
#[allow(dead_code)]
pub async fn start_service(fact_url: String, fact_timeout: Duration) -> SocketAddr {
    let mut config = ServiceConfig::with_port(0);
    config.listener.host = "127.0.0.1".into();
    config.facts.url = fact_url;
    config.facts.timeout = fact_timeout;

    let listener = TcpListener::bind(config.listener.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });
    addr
}

/// Client that never reuses connections or honours proxy env vars.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
