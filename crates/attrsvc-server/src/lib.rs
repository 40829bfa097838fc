//! # Attrsvc Server
//!
//! Process wiring for the name and score services: configuration,
//! logging, storage, routing and the HTTP listener.

pub mod app;
pub mod di;
pub mod startup;
pub mod telemetry;

pub use app::*;

use attrsvc_config::{ConfigLoader, ServiceKind};
use std::process::ExitCode;
use tracing::{error, info};

/// Runs one service process until it is told to stop.
///
/// Exits with a failure code when configuration, storage or the listener
/// cannot be brought up.
pub async fn run(kind: ServiceKind) -> ExitCode {
    let loader = ConfigLoader::from_default_location(kind);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            telemetry::init_default_logging();
            error!(service = kind.service_name(), "Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = telemetry::init_logging(&config.observability) {
        eprintln!("failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!("Starting {}...", kind);
    info!("Version: {}", config.service.version);
    info!("Environment: {}", config.service.environment);
    info!("Configuration directory: {}", loader.config_dir().display());

    let app = match App::build(config).await {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize {}: {}", kind, e);
            return ExitCode::FAILURE;
        }
    };

    match app.run(startup::shutdown_signal()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
