//! Domain entities.

mod named_user;
mod scored_user;

pub use named_user::NamedUser;
pub use scored_user::ScoredUser;
