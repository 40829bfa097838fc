//! Score service trait definition.

use attrsvc_core::{AttrResult, ScoredUser};
use async_trait::async_trait;

/// Score service trait.
#[async_trait]
pub trait ScoreService: Send + Sync {
    /// Gets a user's score. `Ok(None)` when the user does not exist.
    async fn get_user_score(&self, id: &str) -> AttrResult<Option<ScoredUser>>;

    /// Sets a user's score.
    async fn update_user_score(&self, id: &str, score: i64) -> AttrResult<()>;
}
