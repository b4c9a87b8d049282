//! Category API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::category;
use crate::utils::AppResult;
use shared::models::Category;

/// GET /api/categories - all categories
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let categories = category::find_all(state.pool()).await?;
    Ok(Json(categories))
}
