//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator, ServiceKind};
use attrsvc_core::AttrError;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the configuration directory.
pub const CONFIG_DIR_ENV: &str = "ATTRSVC_CONFIG_DIR";

/// Configuration loader for one service.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    kind: ServiceKind,
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is layered from, lowest precedence first:
    /// 1. Built-in defaults for the service kind
    /// 2. `{config_dir}/default.toml`
    /// 3. `{config_dir}/{service_name}.toml`
    /// 4. `{config_dir}/local.toml`
    /// 5. Environment variables with the service prefix (`NAME_SERVICE__SERVER__PORT`)
    pub fn new(kind: ServiceKind, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            config_dir: config_dir.into(),
        }
    }

    /// Uses `$ATTRSVC_CONFIG_DIR`, falling back to `./config`.
    pub fn from_default_location(kind: ServiceKind) -> Self {
        let dir = std::env::var(CONFIG_DIR_ENV).unwrap_or_else(|_| "./config".to_string());
        Self::new(kind, dir)
    }

    /// Returns the directory configuration files are read from.
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, AttrError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let defaults = Config::try_from(&AppConfig::for_service(self.kind))
            .map_err(config_error_to_attr_error)?;

        let mut builder = Config::builder().add_source(defaults);

        for file in ["default", self.kind.service_name(), "local"] {
            let path = self.config_dir.join(format!("{}.toml", file));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(self.kind.env_prefix())
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_attr_error)?;

        if app_config.service.kind != self.kind {
            return Err(AttrError::Configuration(format!(
                "configuration is for {} but this process runs {}",
                app_config.service.kind, self.kind
            )));
        }

        ConfigValidator::validate(&app_config)
            .map_err(|errors| AttrError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

fn config_error_to_attr_error(err: ConfigError) -> AttrError {
    AttrError::Configuration(err.to_string())
}
