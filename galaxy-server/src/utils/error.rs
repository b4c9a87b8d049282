//! Unified error handling
//!
//! Provides the application-level error type and its HTTP mapping:
//! - [`AppError`] - application error enum
//! - [`AppResult`] - handler result alias
//!
//! Every error serializes as `{"error": "..."}`. Server-side failures
//! (database, internal) additionally carry a `detail` field outside
//! production so local debugging does not require log access.
//!
//! # Usage
//!
//! ```ignore
//! // Return an error
//! Err(AppError::NotFound("Menu item 42 not found".into()))
//!
//! // Propagate repository errors with `?`
//! let item = menu_item::find_by_id(pool, id).await?;
//! ```

use std::sync::OnceLock;

use axum::{
    Json,
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Set once at startup; controls whether 5xx responses include `detail`.
static PRODUCTION: OnceLock<bool> = OnceLock::new();

/// Record the runtime environment. Called once from server startup.
pub fn set_production(production: bool) {
    let _ = PRODUCTION.set(production);
}

fn is_production() -> bool {
    *PRODUCTION.get().unwrap_or(&false)
}

/// Error response body
///
/// ```json
/// {
///   "error": "Menu item 42 not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human readable error message
    pub error: String,
    /// Underlying cause, only populated outside production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Application error enum
///
/// | Variant | Status |
/// |---------|--------|
/// | Unauthorized | 401 |
/// | NotFound | 404 |
/// | Conflict | 409 |
/// | Validation | 400 |
/// | Database | 500 |
/// | Internal | 500 |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    /// Missing or failed authentication (401)
    Unauthorized(String),

    #[error("{0}")]
    /// Resource does not exist (404)
    NotFound(String),

    #[error("{0}")]
    /// Resource conflict, e.g. duplicate name (409)
    Conflict(String),

    #[error("{0}")]
    /// Request failed validation (400)
    Validation(String),

    #[error("Database error: {0}")]
    /// Database failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else that went wrong server-side (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg, None),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg, None),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg, None),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database error".to_string(),
                    Some(msg),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                    Some(msg),
                )
            }
        };

        let body = Json(ErrorBody {
            error: message,
            detail: detail.filter(|_| !is_production()),
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl From<MultipartError> for AppError {
    fn from(e: MultipartError) -> Self {
        AppError::Validation(format!("Multipart error: {}", e))
    }
}

// ========== Helper Constructors ==========

impl AppError {
    /// Create an invalid credentials error with unified message
    /// Used to prevent username enumeration during login
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid username or password".to_string())
    }
}

/// Result alias used by every handler
pub type AppResult<T> = Result<T, AppError>;
