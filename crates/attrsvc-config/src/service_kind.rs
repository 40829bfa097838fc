//! Which of the two services a process runs as.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The service a process runs as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceKind {
    /// Reads and writes user names.
    Name,
    /// Reads and writes user scores.
    Score,
}

impl ServiceKind {
    /// Returns the service name used in logs, file names and config files.
    #[must_use]
    pub const fn service_name(&self) -> &'static str {
        match self {
            Self::Name => "name_service",
            Self::Score => "score_service",
        }
    }

    /// Returns the attribute this service owns, which is also its route suffix.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Score => "score",
        }
    }

    /// Returns the port the service listens on unless configured otherwise.
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        match self {
            Self::Name => 9001,
            Self::Score => 9002,
        }
    }

    /// Returns the file-backed database the service opens unless configured otherwise.
    #[must_use]
    pub fn default_database_url(&self) -> String {
        format!("sqlite://{}.db?mode=rwc", self.service_name())
    }

    /// Returns the prefix for environment variable overrides.
    #[must_use]
    pub const fn env_prefix(&self) -> &'static str {
        match self {
            Self::Name => "NAME_SERVICE",
            Self::Score => "SCORE_SERVICE",
        }
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}
