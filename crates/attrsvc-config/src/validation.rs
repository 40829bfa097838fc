//! Configuration validation module.
//!
//! Fails fast on configuration the service could never run with, rather
//! than at bind or connect time.

use crate::AppConfig;
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// URL format is invalid.
    InvalidUrl { message: String },
    /// Pool must allow at least one connection.
    EmptyPool,
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {} (must be 1-65535)", value)
            }
            Self::InvalidUrl { message } => write!(f, "Invalid database URL: {}", message),
            Self::EmptyPool => write!(f, "database.max_connections must be at least 1"),
            Self::NonPositiveTimeout { name } => write!(f, "{} must be positive", name),
            Self::InvalidLogLevel { value } => write!(
                f,
                "Invalid log level: {} (must be trace, debug, info, warn, or error)",
                value
            ),
            Self::InvalidLogFormat { value } => {
                write!(f, "Invalid log format: {} (must be json or pretty)", value)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Valid log formats.
    const VALID_LOG_FORMATS: &'static [&'static str] = &["json", "pretty"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                value: config.server.port,
            });
        }

        Self::validate_database(config, &mut errors);
        Self::validate_observability(config, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_database(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let database = &config.database;

        if database.url.is_empty() {
            errors.push(ConfigValidationError::InvalidUrl {
                message: "URL cannot be empty".to_string(),
            });
        } else if !database.url.starts_with("sqlite:") {
            errors.push(ConfigValidationError::InvalidUrl {
                message: "URL must start with sqlite:".to_string(),
            });
        }

        if database.max_connections == 0 {
            errors.push(ConfigValidationError::EmptyPool);
        }

        if database.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
            });
        }
    }

    fn validate_observability(config: &AppConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.observability.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.observability.log_level.clone(),
            });
        }

        let format = config.observability.log_format.to_lowercase();
        if !Self::VALID_LOG_FORMATS.contains(&format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.observability.log_format.clone(),
            });
        }
    }
}

/// Formats validation errors for display.
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    let mut output = String::from("Configuration validation failed:\n");
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, error));
    }
    output
}
