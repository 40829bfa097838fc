//! Application configuration structures.

use crate::ServiceKind;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Service identity.
    pub service: ServiceMetadata,

    /// HTTP listener configuration.
    pub server: ServerConfig,

    /// Storage configuration.
    pub database: DatabaseConfig,

    /// Logging configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Returns the built-in defaults for a service.
    #[must_use]
    pub fn for_service(kind: ServiceKind) -> Self {
        Self {
            service: ServiceMetadata::for_service(kind),
            server: ServerConfig::for_service(kind),
            database: DatabaseConfig::for_service(kind),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Service identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceMetadata {
    /// Which service this process runs as.
    pub kind: ServiceKind,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl ServiceMetadata {
    fn for_service(kind: ServiceKind) -> Self {
        Self {
            kind,
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerConfig {
    fn for_service(kind: ServiceKind) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: kind.default_port(),
        }
    }

    /// Returns the listener address.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL.
    pub url: String,
    /// Maximum connection pool size.
    pub max_connections: u32,
    /// Pool acquire timeout in seconds.
    pub connect_timeout_secs: u64,
    /// How long a statement waits on a locked database, in seconds.
    pub busy_timeout_secs: u64,
}

impl DatabaseConfig {
    fn for_service(kind: ServiceKind) -> Self {
        Self {
            url: kind.default_database_url(),
            max_connections: 5,
            connect_timeout_secs: 30,
            busy_timeout_secs: 5,
        }
    }

    /// Returns the acquire timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the busy timeout as a Duration.
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
    /// Log format (json, pretty).
    pub log_format: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
        }
    }
}

impl ObservabilityConfig {
    /// Returns true if log lines should be written as JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.log_format.eq_ignore_ascii_case("json")
    }
}
