//! # Attrsvc Repository
//!
//! Data access for the name and score services:
//!
//! ```text
//! Service
//!   ↓  Arc<dyn NameRepository> / Arc<dyn ScoreRepository>
//! SqliteNameRepository / SqliteScoreRepository
//!   ↓  DatabasePool::observe  → QueryObserver
//! SQLite (one file per service, table `users`)
//! ```
//!
//! Every statement goes through [`DatabasePool::observe`], which reports a
//! [`attrsvc_core::QueryEvent`] to the pool's observer.

pub mod pool;
pub mod sqlite;
pub mod traits;

pub use pool::*;
pub use sqlite::*;
pub use traits::*;
