//! Application state for Axum handlers.

use attrsvc_core::{HealthCheck, Logger};
use attrsvc_service::{NameService, ScoreService};
use std::sync::Arc;

/// State shared by the name service handlers.
#[derive(Clone)]
pub struct NameState {
    pub name_service: Arc<dyn NameService>,
    pub logger: Logger,
}

impl NameState {
    /// Creates a new name service state.
    pub fn new(name_service: Arc<dyn NameService>, logger: Logger) -> Self {
        Self {
            name_service,
            logger,
        }
    }
}

/// State shared by the score service handlers.
#[derive(Clone)]
pub struct ScoreState {
    pub score_service: Arc<dyn ScoreService>,
    pub logger: Logger,
}

impl ScoreState {
    /// Creates a new score service state.
    pub fn new(score_service: Arc<dyn ScoreService>, logger: Logger) -> Self {
        Self {
            score_service,
            logger,
        }
    }
}

/// State for the health endpoints.
#[derive(Clone)]
pub struct HealthState {
    pub service: &'static str,
    pub readiness: Arc<dyn HealthCheck>,
}

impl HealthState {
    /// Creates a new health state.
    pub fn new(service: &'static str, readiness: Arc<dyn HealthCheck>) -> Self {
        Self { service, readiness }
    }
}
