//! Response bodies.
//!
//! # Responsibilities
//! - Define the JSON shape of every route's response
//! - Generate request-time timestamps
//!
//! # Design Decisions
//! - Bodies are built fresh per request and never shared
//! - The profile user record is a compile-time constant
//! - Timestamps are UTC ISO-8601 with millisecond precision (`...T09:30:00.123Z`)

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Message returned on the root route.
pub const SERVICE_MESSAGE: &str = "Backend Wizards Stage 0 API";

/// Body message for an uncaught error inside the profile handler.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body message for the last-resort panic handler.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong!";

/// Body message for unmatched routes.
pub const NOT_FOUND_MESSAGE: &str = "Route not found";

/// The fixed profile served on `/me`.
pub const PROFILE_USER: UserProfile = UserProfile {
    email: "goldenwritertolu@gmail.com",
    name: "Toluwani Oluwamuyiwa",
    stack: "Rust/Axum",
};

/// Current UTC time as an ISO-8601 string.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct UserProfile {
    pub email: &'static str,
    pub name: &'static str,
    pub stack: &'static str,
}

/// Body of a successful `GET /me`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub status: ResponseStatus,
    pub user: UserProfile,
    pub timestamp: String,
    pub fact: String,
}

impl ProfileResponse {
    pub fn success(timestamp: String, fact: String) -> Self {
        Self {
            status: ResponseStatus::Success,
            user: PROFILE_USER,
            timestamp,
            fact,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub profile: &'static str,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub endpoints: Endpoints,
    pub status: &'static str,
}

impl ServiceInfo {
    pub fn running() -> Self {
        Self {
            message: SERVICE_MESSAGE,
            endpoints: Endpoints { profile: "/me" },
            status: "running",
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: iso_timestamp(),
        }
    }
}

/// Body of a 404.
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub status: ResponseStatus,
    pub message: &'static str,
    pub path: String,
}

impl NotFoundBody {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: NOT_FOUND_MESSAGE,
            path: path.into(),
        }
    }
}

/// Body of a 500.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: ResponseStatus,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorBody {
    /// Error raised inside a handler that knows it failed.
    pub fn internal() -> Self {
        Self {
            status: ResponseStatus::Error,
            message: INTERNAL_ERROR_MESSAGE,
            timestamp: Some(iso_timestamp()),
        }
    }

    /// Error caught by the global safety net.
    pub fn generic() -> Self {
        Self {
            status: ResponseStatus::Error,
            message: GENERIC_ERROR_MESSAGE,
            timestamp: None,
        }
    }
}
