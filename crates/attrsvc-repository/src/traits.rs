//! Repository trait definitions.
//!
//! Each service owns one capability interface. The SQLite implementations in
//! [`crate::sqlite`] are bound at construction; tests bind fakes instead.

use attrsvc_core::{AttrResult, NamedUser, ScoredUser};
use async_trait::async_trait;

/// Name repository trait.
#[async_trait]
pub trait NameRepository: Send + Sync {
    /// Finds the user with this id. Returns `Ok(None)` when no row matches.
    async fn get(&self, id: &str) -> AttrResult<Option<NamedUser>>;

    /// Writes the user's name, inserting the row if it does not exist.
    async fn update(&self, id: &str, name: &str) -> AttrResult<()>;
}

/// Score repository trait.
#[async_trait]
pub trait ScoreRepository: Send + Sync {
    /// Finds the user with this id. Returns `Ok(None)` when no row matches.
    async fn get(&self, id: &str) -> AttrResult<Option<ScoredUser>>;

    /// Writes the user's score, inserting the row if it does not exist.
    async fn update(&self, id: &str, score: i64) -> AttrResult<()>;
}
