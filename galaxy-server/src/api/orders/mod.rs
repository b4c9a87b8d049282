//! Orders API
//!
//! Routes:
//! - `GET /api/orders` - all orders with nested lines
//! - `POST /api/orders` - checkout (upserts the customer by phone)
//! - `GET /api/orders/{id}` - fetch one
//! - `PATCH /api/orders/{id}/status` - move through the status set

mod handler;

use axum::{
    Router,
    routing::{get, patch},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/status", patch(handler::update_status))
}
