//! Fact source abstraction and fallback resolution.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::resilience::{bounded, DeadlineExceeded};

/// Fact served when the upstream cannot provide one.
pub const FALLBACK_FACT: &str = "Cat fact unavailable at the moment.";

/// Errors that can occur while fetching a fact.
#[derive(Debug, Error)]
pub enum FactError {
    /// The fetch did not finish in time.
    #[error("fact fetch timed out: {0}")]
    Timeout(#[from] DeadlineExceeded),

    /// Connection, TLS, or body transfer failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-2xx status.
    #[error("upstream returned status {0}")]
    Status(StatusCode),

    /// Body exceeded the accepted size.
    #[error("upstream body larger than {0} bytes")]
    TooLarge(usize),

    /// Body was not the expected JSON object.
    #[error("malformed payload: {0}")]
    Malformed(#[source] serde_json::Error),

    /// Payload parsed but carried no usable `fact`.
    #[error("payload has no fact")]
    MissingFact,
}

/// Anything that can produce a single fact string.
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch one fact. Called once per profile request, never retried.
    async fn fetch_fact(&self) -> Result<String, FactError>;
}

/// Fetch a fact within `limit`, substituting [`FALLBACK_FACT`] on any failure.
pub async fn resolve_fact(source: &dyn FactSource, limit: Duration) -> String {
    let outcome = match bounded(limit, source.fetch_fact()).await {
        Ok(result) => result,
        Err(elapsed) => Err(FactError::from(elapsed)),
    };

    match outcome {
        Ok(fact) => fact,
        Err(e) => {
            tracing::warn!(error = %e, "Error fetching cat fact, using fallback");
            FALLBACK_FACT.to_string()
        }
    }
}
