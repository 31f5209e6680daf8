//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Config → Bind listener → Announce → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Stop serving → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: a bind error is fatal
//! - No connection draining; in-flight requests are dropped on exit

pub mod signals;
pub mod startup;

pub use signals::shutdown_signal;
