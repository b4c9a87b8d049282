//! Contact API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::contact;
use crate::utils::AppResult;
use shared::models::{ContactInput, ContactMessage};

/// POST /api/contact - store the message for the back office
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ContactInput>,
) -> AppResult<Json<ContactMessage>> {
    let created = contact::create(state.pool(), input).await?;
    Ok(Json(created))
}
