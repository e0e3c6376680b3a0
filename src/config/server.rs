//! Server configuration
//!
//! The API is meant for a single local respondent, so the default bind is
//! the loopback interface.

use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// IP literal to bind to
    pub host: String,

    pub port: u16,

    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    pub request_timeout_secs: u64,

    /// Comma-separated allowed origins; empty means permissive outside production
    pub cors_origins: Option<String>,
}

/// Deployment environment. Selects log format and CORS strictness.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::LOCALHOST.to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,capability_assessment=debug".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}

impl ServerConfig {
    /// Resolves `host` and `port` into a bind address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidBindAddress(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// True when the listener is only reachable from this machine.
    pub fn is_loopback(&self) -> bool {
        self.socket_addr()
            .map(|addr| addr.ip().is_loopback())
            .unwrap_or(false)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Allowed CORS origins, blanks removed.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
