//! SQLite name repository implementation.

use crate::{traits::NameRepository, DatabasePool};
use attrsvc_core::{AttrError, AttrResult, Logger, NamedUser};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::error;

const SELECT_USER: &str = "SELECT id, name FROM users WHERE id = ?";

const UPSERT_NAME: &str = r#"
    INSERT INTO users (id, name) VALUES (?, ?)
    ON CONFLICT(id) DO UPDATE SET name = excluded.name, updated_at = CURRENT_TIMESTAMP
"#;

/// SQLite name repository implementation.
#[derive(Clone)]
pub struct SqliteNameRepository {
    pool: Arc<DatabasePool>,
    logger: Logger,
}

impl SqliteNameRepository {
    /// Creates a new SQLite name repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>, logger: Logger) -> Self {
        Self { pool, logger }
    }
}

/// Database row representation of a named user.
#[derive(Debug, FromRow)]
struct NameRow {
    id: String,
    name: String,
}

impl From<NameRow> for NamedUser {
    fn from(row: NameRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl NameRepository for SqliteNameRepository {
    async fn get(&self, id: &str) -> AttrResult<Option<NamedUser>> {
        let query = sqlx::query_as::<_, NameRow>(SELECT_USER)
            .bind(id)
            .fetch_optional(self.pool.inner());

        let row = self.pool.observe(SELECT_USER, query).await.map_err(|e| {
            error!(parent: self.logger.span(), id = %id, error = %e, "failed to get user name");
            AttrError::from(e)
        })?;

        Ok(row.map(NamedUser::from))
    }

    async fn update(&self, id: &str, name: &str) -> AttrResult<()> {
        let query = sqlx::query(UPSERT_NAME)
            .bind(id)
            .bind(name)
            .execute(self.pool.inner());

        self.pool.observe(UPSERT_NAME, query).await.map_err(|e| {
            error!(parent: self.logger.span(), id = %id, error = %e, "failed to update user name");
            AttrError::from(e)
        })?;

        Ok(())
    }
}
