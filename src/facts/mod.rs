//! Fact retrieval subsystem.
//!
//! # Data Flow
//! ```text
//! GET /me
//!     → source.rs (resolve_fact: bounded fetch, fallback on any error)
//!     → client.rs (CatFactClient: HTTP GET, status check, payload parse)
//!     → fact string or FALLBACK_FACT
//! ```
//!
//! # Design Decisions
//! - The upstream is untrusted and best-effort
//! - Fetch failures never reach the HTTP response; they are logged and replaced
//! - `FactSource` is a trait so the router can run against in-process sources

pub mod client;
pub mod source;

pub use client::CatFactClient;
pub use source::{resolve_fact, FactError, FactSource, FALLBACK_FACT};
