//! Feedback API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::feedback;
use crate::utils::{AppError, AppResult};
use shared::models::{Feedback, FeedbackInput, FeedbackPublishUpdate};

/// GET /api/feedback - all entries, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Feedback>>> {
    let entries = feedback::find_all(state.pool()).await?;
    Ok(Json(entries))
}

/// GET /api/feedback/published - entries shown on the public site
pub async fn list_published(State(state): State<ServerState>) -> AppResult<Json<Vec<Feedback>>> {
    let entries = feedback::find_published(state.pool()).await?;
    Ok(Json(entries))
}

/// GET /api/feedback/{id} - fetch one
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Feedback>> {
    let entry = feedback::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Feedback {id} not found")))?;
    Ok(Json(entry))
}

/// POST /api/feedback - submit; publication is an admin decision later
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<FeedbackInput>,
) -> AppResult<Json<Feedback>> {
    let created = feedback::create(state.pool(), input).await?;
    Ok(Json(created))
}

/// PATCH /api/feedback/{id}/publish - set publication state
pub async fn set_published(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<FeedbackPublishUpdate>,
) -> AppResult<Json<Feedback>> {
    let updated = feedback::set_published(state.pool(), id, payload.is_published).await?;
    Ok(Json(updated))
}

/// DELETE /api/feedback/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let deleted = feedback::delete(state.pool(), id).await?;
    if !deleted {
        return Err(AppError::NotFound(format!("Feedback {id} not found")));
    }
    Ok(Json(true))
}
