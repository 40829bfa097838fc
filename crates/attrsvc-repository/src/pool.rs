//! Database connection pool management.

use attrsvc_config::{DatabaseConfig, ServiceKind};
use attrsvc_core::{AttrError, AttrResult, HealthCheck, HealthStatus, QueryEvent, QueryObserver};
use async_trait::async_trait;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteQueryResult,
};
use sqlx::ConnectOptions;
use std::future::Future;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Number of rows a query result returned or affected.
pub trait RowCount {
    /// Returns the row count reported to the query observer.
    fn row_count(&self) -> u64;
}

impl<T> RowCount for Option<T> {
    fn row_count(&self) -> u64 {
        u64::from(self.is_some())
    }
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> u64 {
        self.len() as u64
    }
}

impl RowCount for SqliteQueryResult {
    fn row_count(&self) -> u64 {
        self.rows_affected()
    }
}

/// SQLite pool wrapper that reports every query to a [`QueryObserver`].
pub struct DatabasePool {
    pool: SqlitePool,
    observer: Arc<dyn QueryObserver>,
}

impl DatabasePool {
    /// Opens the file-backed store described by `config`, creating it if missing.
    pub async fn connect(
        config: &DatabaseConfig,
        observer: Arc<dyn QueryObserver>,
    ) -> AttrResult<Self> {
        info!("Opening SQLite database at {}", config.url);

        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| AttrError::Database(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.busy_timeout())
            .disable_statement_logging();

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
            .map_err(|e| {
                warn!("Failed to open database: {}", e);
                AttrError::Database(format!("Failed to connect: {}", e))
            })?;

        info!("SQLite connection pool established");
        Ok(Self::with_pool(pool, observer))
    }

    /// Wraps an already opened pool.
    #[must_use]
    pub fn with_pool(pool: SqlitePool, observer: Arc<dyn QueryObserver>) -> Self {
        Self { pool, observer }
    }

    /// Returns a reference to the underlying pool.
    #[must_use]
    pub fn inner(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates or upgrades the service's table.
    pub async fn run_migrations(&self, kind: ServiceKind) -> AttrResult<()> {
        info!("Running database migrations for {}...", kind);
        let migrator = match kind {
            ServiceKind::Name => sqlx::migrate!("../../migrations/name_service"),
            ServiceKind::Score => sqlx::migrate!("../../migrations/score_service"),
        };
        migrator.run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    /// Awaits `query`, timing it and reporting the outcome to the observer.
    pub async fn observe<T, F>(&self, statement: &str, query: F) -> Result<T, sqlx::Error>
    where
        T: RowCount,
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        let start = Instant::now();
        let result = query.await;
        let duration = start.elapsed();

        let event = match &result {
            Ok(value) => QueryEvent {
                statement,
                rows: value.row_count(),
                duration,
                error: None,
            },
            Err(e) => QueryEvent {
                statement,
                rows: 0,
                duration,
                error: Some(e),
            },
        };
        self.observer.on_query(&event);

        result
    }

    /// Checks if the database connection is healthy.
    pub async fn health_check(&self) -> AttrResult<()> {
        const PING: &str = "SELECT 1";
        self.observe(PING, sqlx::query(PING).execute(&self.pool))
            .await
            .map_err(|e| AttrError::Database(format!("Health check failed: {}", e)))?;
        Ok(())
    }

    /// Closes the database pool.
    pub async fn close(&self) {
        info!("Closing database connection pool...");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}

#[async_trait]
impl HealthCheck for DatabasePool {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn check(&self) -> HealthStatus {
        match self.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabasePool")
            .field("size", &self.pool.size())
            .field("num_idle", &self.pool.num_idle())
            .finish()
    }
}

/// Opens the store and applies the service's migrations.
pub async fn create_pool(
    config: &DatabaseConfig,
    kind: ServiceKind,
    observer: Arc<dyn QueryObserver>,
) -> AttrResult<Arc<DatabasePool>> {
    let pool = DatabasePool::connect(config, observer).await?;
    pool.run_migrations(kind).await?;
    Ok(Arc::new(pool))
}
