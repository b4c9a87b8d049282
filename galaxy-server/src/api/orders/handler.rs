//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::order;
use crate::utils::{AppError, AppResult};
use shared::models::{Order, OrderInput, OrderStatus, OrderStatusUpdate};

/// GET /api/orders - all orders, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_all(state.pool()).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id} - fetch one
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let found = order::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {id} not found")))?;
    Ok(Json(found))
}

/// POST /api/orders - checkout
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<OrderInput>,
) -> AppResult<Json<Order>> {
    let created = order::create(state.pool(), input).await?;
    tracing::info!(
        target: "orders",
        id = created.id,
        order_type = %created.order_type,
        total = created.total_amount,
        "Order placed"
    );
    Ok(Json(created))
}

/// PATCH /api/orders/{id}/status - set status from the closed set
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let status: OrderStatus = payload
        .status
        .parse()
        .map_err(|_| {
            AppError::Validation(format!(
                "Invalid status '{}'. Allowed: {}",
                payload.status,
                OrderStatus::ALL.map(|s| s.as_str()).join(", ")
            ))
        })?;

    let updated = order::update_status(state.pool(), id, status).await?;
    Ok(Json(updated))
}
