//! Feedback API
//!
//! Routes:
//! - `GET /api/feedback` - everything, for the admin dashboard
//! - `GET /api/feedback/published` - public testimonials
//! - `POST /api/feedback` - submit (always starts unpublished)
//! - `GET /api/feedback/{id}` - fetch one
//! - `PATCH /api/feedback/{id}/publish` - toggle publication
//! - `DELETE /api/feedback/{id}` - remove an entry

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/feedback", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // (must be before /{id} to avoid path conflicts)
        .route("/published", get(handler::list_published))
        .route("/{id}", get(handler::get_by_id).delete(handler::delete))
        .route("/{id}/publish", patch(handler::set_published))
}
