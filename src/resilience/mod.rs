//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Profile request:
//!     → timeouts.rs (bound the fact fetch)
//!     → On failure: caller substitutes the fallback fact
//! ```
//!
//! # Design Decisions
//! - Every external call has a deadline
//! - A single attempt per request; no retries or circuit breaking

pub mod timeouts;

pub use timeouts::{bounded, DeadlineExceeded};
