//! Request handling middleware.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the client sent none
//! - Log every request (method, path, request ID) before dispatch
//! - Remember the path as sent, then lowercase it for routing
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Logging never touches the request or response

use axum::{
    extract::Request,
    http::{uri::PathAndQuery, HeaderValue, Uri},
    middleware::Next,
    response::Response,
};
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Produces a fresh UUID v4 for each request lacking an `x-request-id`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV4;

impl MakeRequestId for MakeRequestUuidV4 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Path and query exactly as the client sent them, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestedPath(pub String);

fn path_and_query(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}

/// Record the raw path, then lowercase the path part so routing ignores case.
///
/// The query string keeps its original case.
pub async fn fold_path_case(mut request: Request) -> Request {
    let raw = path_and_query(request.uri());
    request.extensions_mut().insert(RequestedPath(raw));

    let path = request.uri().path();
    if path.bytes().any(|b| b.is_ascii_uppercase()) {
        let folded = match request.uri().query() {
            Some(query) => format!("{}?{}", path.to_ascii_lowercase(), query),
            None => path.to_ascii_lowercase(),
        };

        let mut parts = request.uri().clone().into_parts();
        match PathAndQuery::try_from(folded) {
            Ok(pq) => {
                parts.path_and_query = Some(pq);
                match Uri::from_parts(parts) {
                    Ok(uri) => *request.uri_mut() = uri,
                    Err(e) => tracing::debug!(error = %e, "Keeping path case"),
                }
            }
            Err(e) => tracing::debug!(error = %e, "Keeping path case"),
        }
    }

    request
}

/// Log method and path of every incoming request, then call through.
pub async fn log_request(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let path = path_and_query(request.uri());

    tracing::info!(
        request_id = %request_id,
        method = %request.method(),
        path = %path,
        "Incoming request"
    );

    next.run(request).await
}
