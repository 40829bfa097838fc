//! Name service implementation.

use crate::name_service::NameService;
use attrsvc_core::{AttrResult, NamedUser};
use attrsvc_repository::NameRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Name service backed by a [`NameRepository`].
pub struct NameServiceImpl {
    name_repository: Arc<dyn NameRepository>,
}

impl NameServiceImpl {
    /// Creates a new name service.
    pub fn new(name_repository: Arc<dyn NameRepository>) -> Self {
        Self { name_repository }
    }
}

#[async_trait]
impl NameService for NameServiceImpl {
    async fn get_user_name(&self, id: &str) -> AttrResult<Option<NamedUser>> {
        self.name_repository.get(id).await
    }

    async fn update_user_name(&self, id: &str, name: &str) -> AttrResult<()> {
        self.name_repository.update(id, name).await
    }
}
