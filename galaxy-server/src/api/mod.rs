//! API Routes
//!
//! # Structure
//!
//! - [`health`] - liveness and diagnostics
//! - [`auth`] - admin login
//! - [`uploads`] - stored image serving and upload dir info
//! - [`categories`] - menu categories
//! - [`menu_items`] - menu item management
//! - [`offers`] - promotional offers
//! - [`orders`] - checkout and order tracking
//! - [`feedback`] - customer feedback and testimonials
//! - [`contact`] - contact form intake

pub mod forms;

pub mod auth;
pub mod health;
pub mod uploads;

// Data model APIs
pub mod categories;
pub mod contact;
pub mod feedback;
pub mod menu_items;
pub mod offers;
pub mod orders;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;

use crate::core::ServerState;

/// HTTP request log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router with state and middleware applied
pub fn build_app(state: ServerState) -> Router {
    Router::<ServerState>::new()
        // Core APIs
        .merge(auth::router())
        .merge(health::router())
        .merge(uploads::router())
        // Data model APIs
        .merge(categories::router())
        .merge(menu_items::router())
        .merge(offers::router())
        .merge(orders::router())
        .merge(feedback::router())
        .merge(contact::router())
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
}
