//! Auth API
//!
//! Routes:
//! - `POST /api/auth/login` - verify credentials, return the sanitized account

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/auth", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/login", post(handler::login))
}
