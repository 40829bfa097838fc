//! Application lifecycle.

use crate::{di, startup};
use attrsvc_config::AppConfig;
use attrsvc_core::{AttrError, AttrResult, Logger, QueryObserver, TracingQueryObserver};
use attrsvc_repository::{create_pool, DatabasePool};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// A fully wired service, ready to accept connections.
pub struct App {
    config: AppConfig,
    logger: Logger,
    pool: Arc<DatabasePool>,
    router: Router,
}

impl App {
    /// Opens storage, applies migrations and wires every layer.
    pub async fn build(config: AppConfig) -> AttrResult<Self> {
        let kind = config.service.kind;
        let logger = Logger::new(kind.service_name());

        let observer: Arc<dyn QueryObserver> =
            Arc::new(TracingQueryObserver::new(logger.component("storage")));
        let pool = create_pool(&config.database, kind, observer).await?;
        let router = di::build_router(kind, pool.clone(), &logger);

        Ok(Self {
            config,
            logger,
            pool,
            router,
        })
    }

    /// Returns the shared storage pool.
    #[must_use]
    pub fn pool(&self) -> &Arc<DatabasePool> {
        &self.pool
    }

    /// Returns a handle to the router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Binds the configured address and serves until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> AttrResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| AttrError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        self.serve(listener, shutdown).await
    }

    /// Serves on an already bound listener until `shutdown` resolves, then closes storage.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> AttrResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let Self {
            config,
            logger,
            pool,
            router,
        } = self;

        let local_addr = listener
            .local_addr()
            .map_err(|e| AttrError::internal(format!("Failed to read local address: {}", e)))?;
        startup::print_startup_info(config.service.kind, &local_addr.to_string());

        let result = axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AttrError::internal(format!("HTTP server error: {}", e)));

        pool.close().await;
        info!(parent: logger.span(), "Server shutdown complete");
        result
    }
}
