//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields
//!     → logging.rs (subscriber: env filter + fmt layer → stdout)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through request logs
//! - Log level configurable via RUST_LOG

pub mod logging;
