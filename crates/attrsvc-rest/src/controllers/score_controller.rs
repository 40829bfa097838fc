//! User score controller.

use super::bind_json;
use crate::{
    responses::{ApiResult, AppError, MessageResponse},
    state::ScoreState,
};
use attrsvc_core::{AttrError, ScoredUser};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Body of `PUT /users/:id/score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScoreRequest {
    pub score: i64,
}

/// Creates the score router, to be nested under `/users`.
pub fn router() -> Router<ScoreState> {
    Router::new().route("/:id/score", get(get_user_score).put(update_user_score))
}

/// Returns the user's score.
pub async fn get_user_score(
    State(state): State<ScoreState>,
    Path(id): Path<String>,
) -> ApiResult<ScoredUser> {
    let logger = &state.logger;
    match state.score_service.get_user_score(&id).await {
        Ok(Some(user)) => {
            info!(parent: logger.span(), id = %id, "user score retrieved");
            Ok(Json(user))
        }
        Ok(None) => {
            info!(parent: logger.span(), id = %id, "user not found");
            Err(AttrError::user_not_found(&id).into())
        }
        Err(e) => {
            error!(parent: logger.span(), id = %id, code = e.error_code(), error = %e, "failed to get user score");
            Err(e.into())
        }
    }
}

/// Sets the user's score, creating the user if needed.
pub async fn update_user_score(
    State(state): State<ScoreState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateScoreRequest>, JsonRejection>,
) -> ApiResult<MessageResponse> {
    let logger = &state.logger;
    let request = bind_json(payload).map_err(|e| {
        error!(parent: logger.span(), id = %id, code = e.error_code(), error = %e, "failed to bind user score json");
        AppError(e)
    })?;

    state
        .score_service
        .update_user_score(&id, request.score)
        .await
        .map_err(|e| {
            error!(parent: logger.span(), id = %id, code = e.error_code(), error = %e, "failed to update user score");
            AppError(e)
        })?;

    info!(parent: logger.span(), id = %id, score = request.score, "user score updated successfully");
    Ok(Json(MessageResponse::new("User score updated successfully")))
}
