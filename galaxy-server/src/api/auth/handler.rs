//! Auth API Handlers

use std::time::Duration;

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::utils::{AppError, AppResult, password};
use shared::models::{AdminAccount, LoginRequest, LoginResponse};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// POST /api/auth/login
///
/// Failures share one message so usernames cannot be enumerated.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let found = admin_user::find_by_username(state.pool(), req.username.trim()).await?;

    // Fixed delay before the result is examined
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let Some(user) = found else {
        tracing::warn!(target: "auth", username = %req.username, "Login failed - user not found");
        return Err(AppError::invalid_credentials());
    };

    if !password::verify_password(&req.password, &user.password_hash) {
        tracing::warn!(target: "auth", username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    admin_user::touch_last_login(state.pool(), user.id).await?;
    tracing::info!(target: "auth", username = %user.username, "Login successful");

    Ok(Json(LoginResponse {
        success: true,
        user: AdminAccount::from(&user),
    }))
}
