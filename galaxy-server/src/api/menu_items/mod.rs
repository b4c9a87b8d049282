//! Menu Items API
//!
//! Routes:
//! - `GET /api/menu-items` - list, optional `?category=` / `?popular=`
//! - `POST /api/menu-items` - create (JSON or multipart)
//! - `GET /api/menu-items/{id}` - fetch one
//! - `PUT /api/menu-items/{id}` - full replacement (JSON or multipart)
//! - `DELETE /api/menu-items/{id}` - delete row and stored image

mod handler;

use axum::{Router, extract::DefaultBodyLimit, routing::get};

use crate::core::ServerState;

/// Multipart bodies include the image; headroom over the 10MB file cap
/// so oversized uploads get a clean validation error.
const BODY_LIMIT: usize = 12 * 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu-items", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
