//! Offer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::forms::OfferForm;
use crate::core::ServerState;
use crate::db::repository::offer;
use crate::utils::{AppError, AppResult};
use shared::models::OfferItem;

fn today() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

/// GET /api/offers - all offers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<OfferItem>>> {
    let offers = offer::find_all(state.pool()).await?;
    Ok(Json(offers))
}

/// GET /api/offers/active - active offers whose window covers today
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<OfferItem>>> {
    let offers = offer::find_active(state.pool(), &today()).await?;
    Ok(Json(offers))
}

/// GET /api/offers/{id} - fetch one
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<OfferItem>> {
    let item = offer::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Offer {id} not found")))?;
    Ok(Json(item))
}

/// POST /api/offers - create; a multipart file part becomes the banner
pub async fn create(
    State(state): State<ServerState>,
    form: OfferForm,
) -> AppResult<Json<OfferItem>> {
    let OfferForm {
        mut input,
        image_file,
    } = form;
    if let Some(file) = image_file {
        input.image_url = Some(
            state
                .images
                .save("image", &file.filename, &file.data)
                .await?,
        );
    }

    let created = offer::create(state.pool(), input).await?;
    Ok(Json(created))
}

/// PUT /api/offers/{id} - full replacement; swaps the stored banner
/// when a new file arrives
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    form: OfferForm,
) -> AppResult<Json<OfferItem>> {
    let existing = offer::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Offer {id} not found")))?;

    let OfferForm {
        mut input,
        image_file,
    } = form;
    if let Some(file) = image_file {
        input.image_url = Some(
            state
                .images
                .save("image", &file.filename, &file.data)
                .await?,
        );
    }

    let updated = offer::update(state.pool(), id, input).await?;

    if let Some(old) = existing.image_url
        && updated.image_url.as_deref() != Some(old.as_str())
    {
        state.images.remove(&old).await;
    }

    Ok(Json(updated))
}

/// DELETE /api/offers/{id} - delete offer and links, then its banner
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    let existing = offer::find_by_id(state.pool(), id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Offer {id} not found")))?;

    let deleted = offer::delete(state.pool(), id).await?;
    if deleted && let Some(image) = existing.image_url {
        state.images.remove(&image).await;
    }

    Ok(Json(deleted))
}
