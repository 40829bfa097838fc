//! Service layer implementations.
//!
//! Trait definitions live in the parent module.

mod name_service_impl;
mod score_service_impl;

pub use name_service_impl::NameServiceImpl;
pub use score_service_impl::ScoreServiceImpl;
