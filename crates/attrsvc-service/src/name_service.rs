//! Name service trait definition.

use attrsvc_core::{AttrResult, NamedUser};
use async_trait::async_trait;

/// Name service trait.
#[async_trait]
pub trait NameService: Send + Sync {
    /// Gets a user's name. `Ok(None)` when the user does not exist.
    async fn get_user_name(&self, id: &str) -> AttrResult<Option<NamedUser>>;

    /// Sets a user's name.
    async fn update_user_name(&self, id: &str, name: &str) -> AttrResult<()>;
}
