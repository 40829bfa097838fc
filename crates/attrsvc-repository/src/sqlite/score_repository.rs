//! SQLite score repository implementation.

use crate::{traits::ScoreRepository, DatabasePool};
use attrsvc_core::{AttrError, AttrResult, Logger, ScoredUser};
use async_trait::async_trait;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::error;

const SELECT_USER: &str = "SELECT id, score FROM users WHERE id = ?";

const UPSERT_SCORE: &str = r#"
    INSERT INTO users (id, score) VALUES (?, ?)
    ON CONFLICT(id) DO UPDATE SET score = excluded.score, updated_at = CURRENT_TIMESTAMP
"#;

/// SQLite score repository implementation.
#[derive(Clone)]
pub struct SqliteScoreRepository {
    pool: Arc<DatabasePool>,
    logger: Logger,
}

impl SqliteScoreRepository {
    /// Creates a new SQLite score repository.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>, logger: Logger) -> Self {
        Self { pool, logger }
    }
}

#[derive(Debug, FromRow)]
struct ScoreRow {
    id: String,
    score: i64,
}

impl From<ScoreRow> for ScoredUser {
    fn from(row: ScoreRow) -> Self {
        Self {
            id: row.id,
            score: row.score,
        }
    }
}

#[async_trait]
impl ScoreRepository for SqliteScoreRepository {
    async fn get(&self, id: &str) -> AttrResult<Option<ScoredUser>> {
        let query = sqlx::query_as::<_, ScoreRow>(SELECT_USER)
            .bind(id)
            .fetch_optional(self.pool.inner());

        let row = self.pool.observe(SELECT_USER, query).await.map_err(|e| {
            error!(parent: self.logger.span(), id = %id, error = %e, "failed to get user score");
            AttrError::from(e)
        })?;

        Ok(row.map(ScoredUser::from))
    }

    async fn update(&self, id: &str, score: i64) -> AttrResult<()> {
        let query = sqlx::query(UPSERT_SCORE)
            .bind(id)
            .bind(score)
            .execute(self.pool.inner());

        self.pool.observe(UPSERT_SCORE, query).await.map_err(|e| {
            error!(parent: self.logger.span(), id = %id, error = %e, "failed to update user score");
            AttrError::from(e)
        })?;

        Ok(())
    }
}
