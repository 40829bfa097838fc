//! Domain layer: the single-attribute user records owned by each service.

pub mod entities;

pub use entities::*;
