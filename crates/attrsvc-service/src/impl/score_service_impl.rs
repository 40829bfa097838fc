//! Score service implementation.

use crate::score_service::ScoreService;
use attrsvc_core::{AttrResult, ScoredUser};
use attrsvc_repository::ScoreRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Score service backed by a [`ScoreRepository`].
pub struct ScoreServiceImpl {
    score_repository: Arc<dyn ScoreRepository>,
}

impl ScoreServiceImpl {
    /// Creates a new score service.
    pub fn new(score_repository: Arc<dyn ScoreRepository>) -> Self {
        Self { score_repository }
    }
}

#[async_trait]
impl ScoreService for ScoreServiceImpl {
    async fn get_user_score(&self, id: &str) -> AttrResult<Option<ScoredUser>> {
        self.score_repository.get(id).await
    }

    async fn update_user_score(&self, id: &str, score: i64) -> AttrResult<()> {
        self.score_repository.update(id, score).await
    }
}
