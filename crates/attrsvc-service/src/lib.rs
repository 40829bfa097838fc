//! # Attrsvc Service
//!
//! Service layer for the name and score services. Both services forward to
//! their repository unchanged; the layer is the seam where business rules
//! would go.

pub mod r#impl;
pub mod name_service;
pub mod score_service;

pub use name_service::*;
pub use r#impl::{NameServiceImpl, ScoreServiceImpl};
pub use score_service::*;
