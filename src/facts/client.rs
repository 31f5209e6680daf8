//! HTTP client for the cat fact API.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;

use crate::config::FactSourceConfig;
use crate::facts::source::{FactError, FactSource};

/// Largest upstream body accepted. Real payloads are a few hundred bytes.
pub const MAX_FACT_BODY_BYTES: usize = 16 * 1024;

/// Shape of a successful upstream response. Extra fields are ignored.
#[derive(Debug, Deserialize)]
struct FactPayload {
    #[serde(default)]
    fact: Option<String>,
}

/// Fetches facts from a JSON endpoint such as `https://catfact.ninja/fact`.
#[derive(Debug, Clone)]
pub struct CatFactClient {
    http: reqwest::Client,
    url: String,
}

impl CatFactClient {
    /// Build a client for the configured URL.
    pub fn new(config: &FactSourceConfig) -> Result<Self, FactError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(http, config.url.clone()))
    }

    /// Reuse an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, url: impl Into<String>) -> Self {
        Self { http, url: url.into() }
    }
}

#[async_trait]
impl FactSource for CatFactClient {
    async fn fetch_fact(&self) -> Result<String, FactError> {
        let mut response = self
            .http
            .get(&self.url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FactError::Status(status));
        }

        if let Some(len) = response.content_length() {
            if len > MAX_FACT_BODY_BYTES as u64 {
                return Err(FactError::TooLarge(MAX_FACT_BODY_BYTES));
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await? {
            if body.len() + chunk.len() > MAX_FACT_BODY_BYTES {
                return Err(FactError::TooLarge(MAX_FACT_BODY_BYTES));
            }
            body.extend_from_slice(&chunk);
        }

        let fact = parse_payload(&body)?;

        tracing::debug!(url = %self.url, len = fact.len(), "Fetched cat fact");
        Ok(fact)
    }
}

/// Extract a non-empty `fact` string from an upstream body.
fn parse_payload(body: &[u8]) -> Result<String, FactError> {
    let payload: FactPayload = serde_json::from_slice(body).map_err(FactError::Malformed)?;

    match payload.fact {
        Some(fact) if !fact.is_empty() => Ok(fact),
        _ => Err(FactError::MissingFact),
    }
}
