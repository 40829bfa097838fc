//! Component wiring.
//!
//! Each layer receives its collaborators and its logging handle through
//! its constructor:
//!
//! ```text
//! DatabasePool ─► Sqlite*Repository ─► *ServiceImpl ─► *State ─► Router
//! ```

use attrsvc_config::ServiceKind;
use attrsvc_core::{HealthCheck, Logger};
use attrsvc_repository::{
    DatabasePool, NameRepository, ScoreRepository, SqliteNameRepository, SqliteScoreRepository,
};
use attrsvc_rest::{create_name_router, create_score_router, HealthState, NameState, ScoreState};
use attrsvc_service::{NameService, NameServiceImpl, ScoreService, ScoreServiceImpl};
use axum::Router;
use std::sync::Arc;

/// Builds the full handler stack for `kind` on top of an opened pool.
pub fn build_router(kind: ServiceKind, pool: Arc<DatabasePool>, logger: &Logger) -> Router {
    let health = HealthState::new(kind.service_name(), pool.clone() as Arc<dyn HealthCheck>);

    match kind {
        ServiceKind::Name => {
            let repository: Arc<dyn NameRepository> = Arc::new(SqliteNameRepository::new(
                pool,
                logger.component("repository"),
            ));
            let service: Arc<dyn NameService> = Arc::new(NameServiceImpl::new(repository));
            create_name_router(
                NameState::new(service, logger.component("controller")),
                health,
            )
        }
        ServiceKind::Score => {
            let repository: Arc<dyn ScoreRepository> = Arc::new(SqliteScoreRepository::new(
                pool,
                logger.component("repository"),
            ));
            let service: Arc<dyn ScoreService> = Arc::new(ScoreServiceImpl::new(repository));
            create_score_router(
                ScoreState::new(service, logger.component("controller")),
                health,
            )
        }
    }
}
