//! # Attrsvc Core
//!
//! Core types, traits, and error definitions shared by the name and score
//! services. Everything above the storage engine depends on this crate:
//! the entities, the error vocabulary, the logging handle and the query
//! observer contract.

pub mod domain;
pub mod error;
pub mod logging;
pub mod query_log;
pub mod result;
pub mod traits;

pub use domain::*;
pub use error::*;
pub use logging::*;
pub use query_log::*;
pub use result::*;
pub use traits::*;
