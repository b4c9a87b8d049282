//! Contact API
//!
//! Routes:
//! - `POST /api/contact` - store a contact form message

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/contact", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", post(handler::create))
}
