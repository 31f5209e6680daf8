//! Profile Service Library
//!
//! A small Axum service that serves a fixed profile enriched with a fact
//! fetched from a third-party API, plus informational and health routes.

pub mod config;
pub mod facts;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod resilience;

pub use config::ServiceConfig;
pub use facts::{CatFactClient, FactError, FactSource};
pub use http::HttpServer;
