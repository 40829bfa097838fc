//! SQLite repository implementations.

mod name_repository;
mod score_repository;

pub use name_repository::SqliteNameRepository;
pub use score_repository::SqliteScoreRepository;
