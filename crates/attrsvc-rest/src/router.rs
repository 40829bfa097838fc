//! Service routers.

use crate::{
    controllers::{health_controller, name_controller, score_controller},
    middleware::logging_middleware,
    state::{HealthState, NameState, ScoreState},
};
use attrsvc_core::Logger;
use axum::{middleware, Router};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Creates the name service router: `/users/:id/name` plus health endpoints.
pub fn create_name_router(state: NameState, health: HealthState) -> Router {
    let logger = state.logger.clone();
    let api = Router::new()
        .nest("/users", name_controller::router())
        .with_state(state);

    info!(parent: logger.span(), "Router created with /users/:id/name endpoints");
    with_common_layers(api.merge(health_controller::router(health)), logger)
}

/// Creates the score service router: `/users/:id/score` plus health endpoints.
pub fn create_score_router(state: ScoreState, health: HealthState) -> Router {
    let logger = state.logger.clone();
    let api = Router::new()
        .nest("/users", score_controller::router())
        .with_state(state);

    info!(parent: logger.span(), "Router created with /users/:id/score endpoints");
    with_common_layers(api.merge(health_controller::router(health)), logger)
}

fn with_common_layers(router: Router, logger: Logger) -> Router {
    router
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn_with_state(logger, logging_middleware))
}
