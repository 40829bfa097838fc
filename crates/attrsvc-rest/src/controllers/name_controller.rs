//! User name controller.

use super::bind_json;
use crate::{
    responses::{ApiResult, AppError, MessageResponse},
    state::NameState,
};
use attrsvc_core::{AttrError, NamedUser};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Body of `PUT /users/:id/name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

/// Creates the name router, to be nested under `/users`.
pub fn router() -> Router<NameState> {
    Router::new().route("/:id/name", get(get_user_name).put(update_user_name))
}

/// Returns the user's name.
pub async fn get_user_name(
    State(state): State<NameState>,
    Path(id): Path<String>,
) -> ApiResult<NamedUser> {
    let logger = &state.logger;
    match state.name_service.get_user_name(&id).await {
        Ok(Some(user)) => {
            info!(parent: logger.span(), id = %id, "user name retrieved");
            Ok(Json(user))
        }
        Ok(None) => {
            info!(parent: logger.span(), id = %id, "user not found");
            Err(AttrError::user_not_found(&id).into())
        }
        Err(e) => {
            error!(parent: logger.span(), id = %id, code = e.error_code(), error = %e, "failed to get user name");
            Err(e.into())
        }
    }
}

/// Sets the user's name, creating the user if needed.
pub async fn update_user_name(
    State(state): State<NameState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let logger = &state.logger;
    let request = bind_json(payload).map_err(|e| {
        error!(parent: logger.span(), id = %id, code = e.error_code(), error = %e, "failed to bind user name json");
        AppError(e)
    })?;

    state
        .name_service
        .update_user_name(&id, &request.name)
        .await
        .map_err(|e| {
            error!(parent: logger.span(), id = %id, code = e.error_code(), error = %e, "failed to update user name");
            AppError(e)
        })?;

    info!(parent: logger.span(), id = %id, name = %request.name, "user name updated successfully");
    Ok(Json(MessageResponse::new("User name updated successfully")))
}
