//! Route handlers.

use axum::{
    extract::State,
    http::{header, Extensions, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};

use crate::facts::resolve_fact;
use crate::http::error::AppError;
use crate::http::request::RequestedPath;
use crate::http::response::{
    iso_timestamp, HealthStatus, NotFoundBody, ProfileResponse, ServiceInfo,
};
use crate::http::server::AppState;

/// `GET /` - static descriptor of the service.
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::running())
}

/// `GET /health`
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// `GET /me` - fixed profile, request timestamp and a fresh fact.
///
/// A failed fact fetch degrades to the fallback fact and still returns 200.
pub async fn profile(State(state): State<AppState>) -> Result<Response, AppError> {
    let timestamp = iso_timestamp();
    let fact = resolve_fact(state.facts.as_ref(), state.fact_timeout).await;

    let body = serde_json::to_vec(&ProfileResponse::success(timestamp, fact))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response())
}

/// Fallback for unmatched paths and methods.
///
/// Echoes the path as the client sent it, not the normalized routing path.
pub async fn not_found(uri: Uri, extensions: Extensions) -> (StatusCode, Json<NotFoundBody>) {
    let path = match extensions.get::<RequestedPath>() {
        Some(RequestedPath(raw)) => raw.as_str(),
        None => uri
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or_else(|| uri.path()),
    };

    tracing::warn!(path = %path, "No route matched");
    (StatusCode::NOT_FOUND, Json(NotFoundBody::new(path)))
}
