//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap outbound calls with a deadline
//! - Cancel the call cleanly when the deadline passes
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other errors

use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// The wrapped future did not complete within its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("deadline of {}ms exceeded", .limit.as_millis())]
pub struct DeadlineExceeded {
    pub limit: Duration,
}

/// Run `future` for at most `limit`.
///
/// On expiry the future is dropped, so no partial result survives.
pub async fn bounded<F>(limit: Duration, future: F) -> Result<F::Output, DeadlineExceeded>
where
    F: Future,
{
    tokio::time::timeout(limit, future)
        .await
        .map_err(|_| DeadlineExceeded { limit })
}
