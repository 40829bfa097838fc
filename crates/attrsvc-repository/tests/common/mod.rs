//! Common test infrastructure for database integration tests.

use attrsvc_config::{AppConfig, ServiceKind};
use attrsvc_core::{QueryEvent, QueryObserver};
use attrsvc_repository::{create_pool, DatabasePool};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// A query event with owned fields.
#[derive(Debug, Clone)]
pub struct RecordedQuery {
    pub statement: String,
    pub rows: u64,
    pub error: Option<String>,
}

/// Observer that keeps every event it receives.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RecordedQuery>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<RecordedQuery> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl QueryObserver for RecordingObserver {
    fn on_query(&self, event: &QueryEvent<'_>) {
        self.events.lock().unwrap().push(RecordedQuery {
            statement: event.statement.to_string(),
            rows: event.rows,
            error: event.error.map(ToString::to_string),
        });
    }
}

/// Temporary file-backed database for one service.
///
/// The directory and the database file are removed when this is dropped.
pub struct TestDatabase {
    _dir: TempDir,
    pool: Arc<DatabasePool>,
    observer: Arc<RecordingObserver>,
}

impl TestDatabase {
    /// Creates a fresh database with the service's migrations applied.
    pub async fn new(kind: ServiceKind) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig::for_service(kind).database;
        config.url = format!(
            "sqlite://{}",
            dir.path().join(format!("{}.db", kind.service_name())).display()
        );

        let observer = Arc::new(RecordingObserver::default());
        let pool = create_pool(&config, kind, observer.clone())
            .await
            .expect("Failed to open test database");

        Self {
            _dir: dir,
            pool,
            observer,
        }
    }

    /// Returns a reference to the database pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    /// Returns the observer attached to the pool.
    pub fn observer(&self) -> &RecordingObserver {
        &self.observer
    }

    /// Drops the users table so the next query fails.
    pub async fn break_schema(&self) {
        sqlx::query("DROP TABLE users")
            .execute(self.pool.inner())
            .await
            .expect("Failed to drop table");
    }
}
