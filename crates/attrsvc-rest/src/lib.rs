//! # Attrsvc REST
//!
//! REST API layer using Axum for the name and score services.
//! Provides the `/users/:id/<attribute>` endpoints, health checks and the
//! request logging middleware.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
