//! Handler errors and the global panic handler.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::ErrorBody;

/// Unexpected failure inside a route handler.
///
/// Detail is logged server-side; the caller only sees the generic body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Unexpected error in handler");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::internal())).into_response()
    }
}

/// Last-resort handler for panics escaping a route.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!(error = %detail, "Global error handler caught a panic");
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::generic())).into_response()
}
