//! Multipart form encoding
//!
//! Builds the `multipart/form-data` payloads the server's form extractor
//! expects: camelCase text fields, list fields JSON-encoded, booleans as
//! "true"/"false", the image as a file part (or a text field carrying an
//! existing path).

use reqwest::multipart::{Form, Part};

use crate::error::ClientResult;
use crate::types::ImageUpload;
use shared::models::{MenuItemInput, OfferInput};

pub(crate) fn menu_item_form(
    input: &MenuItemInput,
    image: Option<ImageUpload>,
) -> ClientResult<Form> {
    let mut form = Form::new()
        .text("name", input.name.clone())
        .text("description", input.description.clone())
        .text("price", input.price.to_string())
        .text("category", input.category.clone())
        .text("popular", input.popular.to_string())
        .text(
            "availableSizes",
            serde_json::to_string(&input.available_sizes)?,
        )
        .text(
            "availableToppings",
            serde_json::to_string(&input.available_toppings)?,
        );

    if let Some(discount) = input.discount {
        form = form.text("discount", discount.to_string());
    }
    if let Some(path) = &input.image {
        form = form.text("image", path.clone());
    }
    if let Some(upload) = image {
        form = form.part("image", Part::bytes(upload.bytes).file_name(upload.filename));
    }

    Ok(form)
}

pub(crate) fn offer_form(input: &OfferInput, image: Option<ImageUpload>) -> ClientResult<Form> {
    let mut form = Form::new()
        .text("title", input.title.clone())
        .text("description", input.description.clone())
        .text("discount", input.discount.to_string())
        .text(
            "menuItemIds",
            serde_json::to_string(&input.menu_item_ids)?,
        )
        .text("startDate", input.start_date.clone())
        .text("endDate", input.end_date.clone())
        .text("isActive", input.is_active.to_string());

    if let Some(url) = &input.image_url {
        form = form.text("imageUrl", url.clone());
    }
    if let Some(upload) = image {
        form = form.part("image", Part::bytes(upload.bytes).file_name(upload.filename));
    }

    Ok(form)
}
