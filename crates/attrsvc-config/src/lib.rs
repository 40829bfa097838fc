//! # Attrsvc Config
//!
//! Configuration management for the name and score services.
//! Supports layered configuration from built-in per-service defaults,
//! TOML files and environment variables.

mod app_config;
mod loader;
mod service_kind;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use service_kind::*;
pub use validation::*;
