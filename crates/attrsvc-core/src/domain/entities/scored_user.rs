//! Scored user entity.

use serde::{Deserialize, Serialize};

/// A user record owned by the score service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredUser {
    /// Unique user identifier.
    pub id: String,
    /// Current score.
    pub score: i64,
}

impl ScoredUser {
    /// Creates a new scored user.
    #[must_use]
    pub fn new(id: impl Into<String>, score: i64) -> Self {
        Self { id: id.into(), score }
    }
}
