//! Configuration subsystem.
//!
//! # Data Flow
//! ```text
//! PORT env var / --port flag (clap, main.rs)
//!     → ServiceConfig::with_port
//!     → HttpServer::new (fact client, router state)
//!     → lifecycle::startup::bind (listener)
//! ```
//!
//! # Design Decisions
//! - The listen port is the only externally supplied value
//! - Fact source URL and timeout keep fixed defaults; tests override them in code
//! - Config is immutable once the server is built

pub mod schema;

pub use schema::{FactSourceConfig, ListenerConfig, ServiceConfig};
pub use schema::{CAT_FACT_URL, DEFAULT_FACT_TIMEOUT, DEFAULT_PORT, DEFAULT_REQUEST_TIMEOUT};
