//! Categories API
//!
//! Routes:
//! - `GET /api/categories` - all categories, sorted by name
//!
//! Categories have no CRUD of their own; they come into existence the
//! first time a menu item names them.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/categories", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
