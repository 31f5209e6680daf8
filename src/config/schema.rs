//! Configuration schema definitions.

use std::time::Duration;

/// Port used when neither `PORT` nor `--port` is given.
pub const DEFAULT_PORT: u16 = 3000;

/// Upstream endpoint serving a random cat fact.
pub const CAT_FACT_URL: &str = "https://catfact.ninja/fact";

/// Upper bound for a single fact fetch.
pub const DEFAULT_FACT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Upper bound for handling a whole request. Must stay above the fact timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Root configuration for the service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Outbound fact service settings.
    pub facts: FactSourceConfig,

    /// Deadline applied to every inbound request.
    pub request_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            facts: FactSourceConfig::default(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ServiceConfig {
    /// Default configuration listening on `port`.
    pub fn with_port(port: u16) -> Self {
        Self {
            listener: ListenerConfig {
                port,
                ..ListenerConfig::default()
            },
            ..Self::default()
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Interface to bind. All interfaces by default.
    pub host: String,

    /// TCP port. `0` asks the OS for an ephemeral port.
    pub port: u16,
}

impl ListenerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

/// Fact service configuration.
#[derive(Debug, Clone)]
pub struct FactSourceConfig {
    /// URL returning `{"fact": "..."}`.
    pub url: String,

    /// Deadline for one fetch (connect, status and body).
    pub timeout: Duration,
}

impl Default for FactSourceConfig {
    fn default() -> Self {
        Self {
            url: CAT_FACT_URL.to_string(),
            timeout: DEFAULT_FACT_TIMEOUT,
        }
    }
}
