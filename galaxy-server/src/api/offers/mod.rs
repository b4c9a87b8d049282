//! Offers API
//!
//! Routes:
//! - `GET /api/offers` - all offers
//! - `GET /api/offers/active` - active and inside the date window today
//! - `POST /api/offers` - create (JSON or multipart)
//! - `GET /api/offers/{id}` - fetch one
//! - `PUT /api/offers/{id}` - full replacement (JSON or multipart)
//! - `DELETE /api/offers/{id}` - delete offer, links and stored image

mod handler;

use axum::{Router, extract::DefaultBodyLimit, routing::get};

use crate::core::ServerState;

const BODY_LIMIT: usize = 12 * 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/offers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        // (must be before /{id} to avoid path conflicts)
        .route("/active", get(handler::list_active))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
