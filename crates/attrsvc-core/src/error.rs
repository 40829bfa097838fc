//! Unified error types for all layers of the attribute services.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for the attribute services.
///
/// A missing row is not an error at the repository layer (it is `Ok(None)`);
/// [`AttrError::UserNotFound`] exists so the HTTP layer can render the
/// not-found branch through the same path as every other failure.
#[derive(Error, Debug)]
pub enum AttrError {
    /// No row matches the requested user id.
    #[error("User not found")]
    UserNotFound { id: String },

    /// The request body could not be parsed or bound.
    #[error("{0}")]
    MalformedBody(String),

    /// Storage engine failure.
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AttrError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::UserNotFound { .. } => 404,
            Self::MalformedBody(_) => 400,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. } => "NOT_FOUND",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a user id.
    #[must_use]
    pub fn user_not_found<T: ToString>(id: T) -> Self {
        Self::UserNotFound { id: id.to_string() }
    }

    /// Creates a malformed body error.
    #[must_use]
    pub fn malformed_body<T: Into<String>>(message: T) -> Self {
        Self::MalformedBody(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AttrError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::migrate::MigrateError> for AttrError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Database(format!("Migration failed: {}", err))
    }
}

/// Serializable error body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new error response from an `AttrError`.
    #[must_use]
    pub fn from_error(error: &AttrError) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl From<&AttrError> for ErrorResponse {
    fn from(error: &AttrError) -> Self {
        Self::from_error(error)
    }
}
