//! REST API controllers.

pub mod health_controller;
pub mod name_controller;
pub mod score_controller;

pub use health_controller::*;

use attrsvc_core::AttrError;
use axum::{extract::rejection::JsonRejection, Json};

/// Unwraps a JSON body, turning any rejection into a 400 with the parse message.
pub(crate) fn bind_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AttrError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| AttrError::malformed_body(rejection.body_text()))
}
