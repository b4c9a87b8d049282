//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::api::forms::MenuItemForm;
use crate::core::ServerState;
use crate::db::repository::menu_item;
use crate::utils::{AppError, AppResult};
use shared::models::{MenuItem, MenuItemFilter};

/// GET /api/menu-items - list, optionally filtered
pub async fn list(
    State(state): State<ServerState>,
    Query(mut filter): Query<MenuItemFilter>,
) -> AppResult<Json<Vec<MenuItem>>> {
    // An empty ?category= means no filter
    if filter.category.as_deref().is_some_and(|c| c.trim().is_empty()) {
        filter.category = None;
    }
    let items = menu_item::find_all(state.pool(), &filter).await?;
    Ok(Json(items))
}

/// GET /api/menu-items/{id} - fetch one
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuItem>> {
    let item = menu_item::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Menu item {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/menu-items - create; a multipart file part becomes the image
pub async fn create(
    State(state): State<ServerState>,
    form: MenuItemForm,
) -> AppResult<Json<MenuItem>> {
    let MenuItemForm {
        mut input,
        image_file,
    } = form;
    if let Some(file) = image_file {
        input.image = Some(
            state
                .images
                .save("image", &file.filename, &file.data)
                .await?,
        );
    }

    let item = menu_item::create(state.pool(), input).await?;
    Ok(Json(item))
}

/// PUT /api/menu-items/{id} - full replacement; swaps the stored image
/// when a new file arrives
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    form: MenuItemForm,
) -> AppResult<Json<MenuItem>> {
    let existing = menu_item::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Menu item {id} not found")))?;

    let MenuItemForm {
        mut input,
        image_file,
    } = form;
    if let Some(file) = image_file {
        input.image = Some(
            state
                .images
                .save("image", &file.filename, &file.data)
                .await?,
        );
    }

    let item = menu_item::update(state.pool(), id, input).await?;

    // The row no longer references the old file
    if let Some(old) = existing.image
        && item.image.as_deref() != Some(old.as_str())
    {
        state.images.remove(&old).await;
    }

    Ok(Json(item))
}

/// DELETE /api/menu-items/{id} - delete row, then its stored image
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let existing = menu_item::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Menu item {id} not found")))?;

    let deleted = menu_item::delete(state.pool(), id).await?;
    if deleted && let Some(image) = existing.image {
        state.images.remove(&image).await;
    }

    Ok(Json(deleted))
}
