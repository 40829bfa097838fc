//! Named user entity.

use serde::{Deserialize, Serialize};

/// A user record owned by the name service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedUser {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl NamedUser {
    /// Creates a new named user.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
