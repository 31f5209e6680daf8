//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, logging, panics, timeout)
//! - Match paths ignoring case and a trailing slash
//! - Bind server to listener
//! - Stop on SIGINT/SIGTERM without draining connections

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::{middleware, routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    normalize_path::NormalizePathLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::facts::{CatFactClient, FactError, FactSource};
use crate::http::error::handle_panic;
use crate::http::handlers;
use crate::http::request::{fold_path_case, log_request, MakeRequestUuidV4};
use crate::lifecycle::signals::shutdown_signal;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub facts: Arc<dyn FactSource>,
    pub fact_timeout: Duration,
}

/// HTTP server for the profile service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server that fetches facts from the configured upstream.
    pub fn new(config: ServiceConfig) -> Result<Self, FactError> {
        let client = CatFactClient::new(&config.facts)?;
        Ok(Self::with_fact_source(config, Arc::new(client)))
    }

    /// Create a server backed by an arbitrary fact source.
    pub fn with_fact_source(config: ServiceConfig, facts: Arc<dyn FactSource>) -> Self {
        let state = AppState {
            facts,
            fact_timeout: config.facts.timeout,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let routes = Router::new()
            .route("/", get(handlers::root))
            .route("/me", get(handlers::profile))
            .route("/health", get(handlers::health))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state);

        // Routing sees `/ME/` as `/me`. Layers on a Router run after route
        // matching, so normalization wraps the routes as an outer service.
        let normalized = ServiceBuilder::new()
            .layer(middleware::map_request(fold_path_case))
            .layer(NormalizePathLayer::trim_trailing_slash())
            .service(routes);

        with_middleware(Router::new().fallback_service(normalized), config.request_timeout)
    }

    /// The fully layered router, usable without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Serve on `listener` until a termination signal arrives.
    ///
    /// In-flight requests are abandoned on shutdown.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let serve = axum::serve(listener, self.router).into_future();

        tokio::select! {
            result = serve => result?,
            signal = shutdown_signal() => {
                tracing::info!(signal, "Signal received: closing HTTP server");
            }
        }

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wrap `router` in the service-wide middleware stack (outermost first).
#[allow(deprecated)]
pub(crate) fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http())
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(log_request))
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::facts::FALLBACK_FACT;
    use crate::http::request::X_REQUEST_ID;

    struct Fixed(&'static str);

    #[async_trait]
    impl FactSource for Fixed {
        async fn fetch_fact(&self) -> Result<String, FactError> {
            Ok(self.0.to_string())
        }
    }

    struct Unavailable;

    #[async_trait]
    impl FactSource for Unavailable {
        async fn fetch_fact(&self) -> Result<String, FactError> {
            Err(FactError::MissingFact)
        }
    }

    fn server_with(source: impl FactSource + 'static) -> HttpServer {
        HttpServer::with_fact_source(ServiceConfig::default(), Arc::new(source))
    }

    async fn send(router: Router, method: Method, uri: &str) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router.oneshot(request).await.unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_describes_endpoints() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["message"], "Backend Wizards Stage 0 API");
        assert_eq!(body["endpoints"]["profile"], "/me");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn test_health() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");

        let timestamp = body["timestamp"].as_str().unwrap();
        let parsed = chrono::DateTime::parse_from_rfc3339(timestamp)
            .expect("timestamp is not RFC 3339")
            .with_timezone(&chrono::Utc);
        let age = chrono::Utc::now() - parsed;
        assert!(age >= chrono::TimeDelta::zero() && age < chrono::TimeDelta::seconds(5), "{timestamp}");
    }

    #[tokio::test]
    async fn test_profile_uses_fetched_fact() {
        let router = server_with(Fixed("Cats sleep 70% of their lives.")).router();
        let response = send(router, Method::GET, "/me").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["user"]["email"], "goldenwritertolu@gmail.com");
        assert_eq!(body["user"]["name"], "Toluwani Oluwamuyiwa");
        assert_eq!(body["user"]["stack"], "Rust/Axum");
        assert_eq!(body["fact"], "Cats sleep 70% of their lives.");
    }

    #[tokio::test]
    async fn test_profile_degrades_to_fallback() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/me").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["fact"], FALLBACK_FACT);
    }

    #[tokio::test]
    async fn test_unknown_path_is_404_with_path() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/nonexistent").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Route not found");
        assert_eq!(body["path"], "/nonexistent");
    }

    #[tokio::test]
    async fn test_unknown_path_echoes_query() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/nope?x=1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["path"], "/nope?x=1");
    }

    #[tokio::test]
    async fn test_wrong_method_is_404() {
        let response = send(server_with(Unavailable).router(), Method::POST, "/me").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["path"], "/me");
    }

    #[tokio::test]
    async fn test_trailing_slash_and_case_reach_routes() {
        for uri in ["/me/", "/ME", "/Me/"] {
            let router = server_with(Fixed("Cats purr at 25 Hz.")).router();
            let response = send(router, Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(json_body(response).await["fact"], "Cats purr at 25 Hz.", "{uri}");
        }

        for uri in ["/health/", "/HEALTH"] {
            let response = send(server_with(Unavailable).router(), Method::GET, uri).await;
            assert_eq!(response.status(), StatusCode::OK, "{uri}");
            assert_eq!(json_body(response).await["status"], "healthy", "{uri}");
        }
    }

    #[tokio::test]
    async fn test_not_found_echoes_path_as_sent() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/NoWhere/?Q=1").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["path"], "/NoWhere/?Q=1");

        let response = send(server_with(Unavailable).router(), Method::POST, "/ME/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["path"], "/ME/");
    }

    #[tokio::test]
    async fn test_request_id_is_returned() {
        let response = send(server_with(Unavailable).router(), Method::GET, "/health").await;
        let id = response.headers().get(X_REQUEST_ID).expect("missing request id");
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_client_request_id_is_kept() {
        let request = Request::builder()
            .uri("/health")
            .header(X_REQUEST_ID, "abc-123")
            .body(Body::empty())
            .unwrap();
        let response = server_with(Unavailable).router().oneshot(request).await.unwrap();
        assert_eq!(response.headers().get(X_REQUEST_ID).unwrap(), "abc-123");
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let request = Request::builder()
            .uri("/me")
            .header(header::ORIGIN, "https://example.com")
            .body(Body::empty())
            .unwrap();
        let response = server_with(Unavailable).router().oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    async fn explode() -> &'static str {
        panic!("handler exploded")
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        let router = with_middleware(
            Router::new().route("/boom", get(explode)),
            Duration::from_secs(5),
        );
        let response = send(router, Method::GET, "/boom").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Something went wrong!");
    }
}
