//! Form Payload Extraction
//!
//! The admin storefront submits menu items and offers either as plain JSON
//! or as `multipart/form-data` (when an image is attached). Both arrive
//! here and come out as one normalized payload: the typed input plus an
//! optional raw image part. Handlers never look at the content type.
//!
//! Multipart text fields mirror the JSON wire names (camelCase). List
//! fields (`availableSizes`, `availableToppings`, `menuItemIds`) are
//! JSON-encoded strings, booleans are `"true"`/`"false"`, and `image` /
//! `imageUrl` may be a text field holding an existing path instead of a
//! file part.

use std::collections::HashMap;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;

use crate::utils::AppError;
use shared::models::{MenuItemInput, OfferInput};

/// Raw uploaded file from a multipart part
#[derive(Debug, Clone)]
pub struct SubmittedImage {
    pub filename: String,
    pub data: Bytes,
}

/// Normalized menu item payload: typed input + optional new image
#[derive(Debug)]
pub struct MenuItemForm {
    pub input: MenuItemInput,
    pub image_file: Option<SubmittedImage>,
}

/// Normalized offer payload: typed input + optional new image
#[derive(Debug)]
pub struct OfferForm {
    pub input: OfferInput,
    pub image_file: Option<SubmittedImage>,
}

impl<S> FromRequest<S> for MenuItemForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            let fields = FormFields::collect(multipart).await?;
            Self::from_fields(fields)
        } else {
            let Json(input) = Json::<MenuItemInput>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(Self {
                input,
                image_file: None,
            })
        }
    }
}

impl MenuItemForm {
    fn from_fields(fields: FormFields) -> Result<Self, AppError> {
        let input = MenuItemInput {
            name: fields.required("name")?,
            description: fields.text("description").unwrap_or_default().to_string(),
            price: fields.parse_f64("price")?,
            category: fields.required("category")?,
            image: fields.optional_text("image"),
            popular: fields.parse_bool("popular", false),
            available_sizes: fields.parse_json_list("availableSizes")?,
            available_toppings: fields.parse_json_list("availableToppings")?,
            discount: fields.parse_i64_opt("discount")?,
        };
        Ok(Self {
            input,
            image_file: fields.file,
        })
    }
}

impl<S> FromRequest<S> for OfferForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            let fields = FormFields::collect(multipart).await?;
            Self::from_fields(fields)
        } else {
            let Json(input) = Json::<OfferInput>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(Self {
                input,
                image_file: None,
            })
        }
    }
}

impl OfferForm {
    fn from_fields(fields: FormFields) -> Result<Self, AppError> {
        let input = OfferInput {
            title: fields.required("title")?,
            description: fields.text("description").unwrap_or_default().to_string(),
            image_url: fields.optional_text("imageUrl"),
            discount: fields.parse_i64("discount")?,
            menu_item_ids: fields.parse_json_list("menuItemIds")?,
            start_date: fields.required("startDate")?,
            end_date: fields.required("endDate")?,
            is_active: fields.parse_bool("isActive", true),
        };
        Ok(Self {
            input,
            image_file: fields.file,
        })
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

/// Text fields plus at most one file, collected from a multipart body
struct FormFields {
    values: HashMap<String, String>,
    file: Option<SubmittedImage>,
}

impl FormFields {
    /// Drain all parts. These forms carry a single file, so any part with
    /// a filename is taken as the image; empty file parts (no upload
    /// selected) are skipped.
    async fn collect(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut values = HashMap::new();
        let mut file = None;

        while let Some(field) = multipart.next_field().await? {
            let file_name = field.file_name().map(str::to_string);
            match file_name {
                Some(original) if !original.is_empty() => {
                    let data = field.bytes().await?;
                    if !data.is_empty() {
                        file = Some(SubmittedImage {
                            filename: original,
                            data,
                        });
                    }
                }
                _ => {
                    let Some(name) = field.name().map(str::to_string) else {
                        continue;
                    };
                    values.insert(name, field.text().await?);
                }
            }
        }

        Ok(Self { values, file })
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Non-empty trimmed text, or None
    fn optional_text(&self, key: &str) -> Option<String> {
        self.text(key)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    fn required(&self, key: &str) -> Result<String, AppError> {
        self.text(key)
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation(format!("Missing field: {key}")))
    }

    fn parse_f64(&self, key: &str) -> Result<f64, AppError> {
        self.required(key)?
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("{key} must be a number")))
    }

    fn parse_i64(&self, key: &str) -> Result<i64, AppError> {
        self.required(key)?
            .trim()
            .parse()
            .map_err(|_| AppError::Validation(format!("{key} must be an integer")))
    }

    fn parse_i64_opt(&self, key: &str) -> Result<Option<i64>, AppError> {
        match self.text(key) {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| AppError::Validation(format!("{key} must be an integer"))),
        }
    }

    /// Checkboxes serialize as the strings "true"/"false"
    fn parse_bool(&self, key: &str, default: bool) -> bool {
        match self.text(key) {
            Some(raw) => raw == "true",
            None => default,
        }
    }

    fn parse_json_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, AppError> {
        match self.text(key) {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(raw)
                .map_err(|_| AppError::Validation(format!("{key} must be a JSON array"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;

    const BOUNDARY: &str = "galaxy-form-test";

    fn text_part(name: &str, value: &str) -> String {
        format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
    }

    fn file_part(name: &str, filename: &str, content: &str) -> String {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n{content}\r\n"
        )
    }

    fn multipart_request(parts: &[String]) -> Request<Body> {
        let body = format!("{}--{BOUNDARY}--\r\n", parts.concat());
        Request::builder()
            .method("POST")
            .uri("/")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn json_request(json: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_menu_item_multipart_with_file() {
        let req = multipart_request(&[
            text_part("name", "Diavola"),
            text_part("description", "Hot salami"),
            text_part("price", "11.5"),
            text_part("category", "Classics"),
            text_part("popular", "true"),
            text_part("availableSizes", r#"["Small","Large"]"#),
            text_part("availableToppings", r#"["Olives"]"#),
            text_part("discount", "15"),
            file_part("image", "diavola.png", "fake png bytes"),
        ]);

        let form = MenuItemForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.input.name, "Diavola");
        assert_eq!(form.input.price, 11.5);
        assert!(form.input.popular);
        assert_eq!(form.input.available_sizes, vec!["Small", "Large"]);
        assert_eq!(form.input.discount, Some(15));
        assert!(form.input.image.is_none());

        let file = form.image_file.unwrap();
        assert_eq!(file.filename, "diavola.png");
        assert_eq!(&file.data[..], b"fake png bytes");
    }

    #[tokio::test]
    async fn test_menu_item_multipart_keeps_existing_image_path() {
        let req = multipart_request(&[
            text_part("name", "Margherita"),
            text_part("price", "9.5"),
            text_part("category", "Classics"),
            text_part("image", "/uploads/image-123-000000001.png"),
        ]);

        let form = MenuItemForm::from_request(req, &()).await.unwrap();
        assert_eq!(
            form.input.image.as_deref(),
            Some("/uploads/image-123-000000001.png")
        );
        assert!(form.image_file.is_none());
        // Unsent fields take their defaults
        assert!(!form.input.popular);
        assert!(form.input.available_sizes.is_empty());
        assert!(form.input.discount.is_none());
    }

    #[tokio::test]
    async fn test_menu_item_json_body() {
        let req = json_request(
            r#"{"name":"Cola","description":"Cold","price":2.5,"category":"Drinks",
                "availableSizes":[],"availableToppings":[]}"#,
        );

        let form = MenuItemForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.input.name, "Cola");
        assert!(form.image_file.is_none());
    }

    #[tokio::test]
    async fn test_menu_item_multipart_rejects_bad_price() {
        let req = multipart_request(&[
            text_part("name", "Broken"),
            text_part("price", "cheap"),
            text_part("category", "Classics"),
        ]);

        let err = MenuItemForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("price")));
    }

    #[tokio::test]
    async fn test_menu_item_multipart_rejects_missing_name() {
        let req = multipart_request(&[text_part("price", "9.0"), text_part("category", "Classics")]);

        let err = MenuItemForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("name")));
    }

    #[tokio::test]
    async fn test_menu_item_multipart_rejects_malformed_list() {
        let req = multipart_request(&[
            text_part("name", "Broken"),
            text_part("price", "9.0"),
            text_part("category", "Classics"),
            text_part("availableSizes", "Small,Large"),
        ]);

        let err = MenuItemForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("availableSizes")));
    }

    #[tokio::test]
    async fn test_offer_multipart_with_ids_and_default_active() {
        let req = multipart_request(&[
            text_part("title", "Family Tuesday"),
            text_part("description", "Family pizzas"),
            text_part("discount", "20"),
            text_part("menuItemIds", "[11,12]"),
            text_part("startDate", "2025-06-01"),
            text_part("endDate", "2025-06-30"),
            file_part("image", "banner.jpg", "jpg"),
        ]);

        let form = OfferForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.input.title, "Family Tuesday");
        assert_eq!(form.input.discount, 20);
        assert_eq!(form.input.menu_item_ids, vec![11, 12]);
        assert!(form.input.is_active);
        assert_eq!(form.image_file.unwrap().filename, "banner.jpg");
    }

    #[tokio::test]
    async fn test_offer_multipart_explicit_inactive() {
        let req = multipart_request(&[
            text_part("title", "Paused"),
            text_part("discount", "10"),
            text_part("startDate", "2025-06-01"),
            text_part("endDate", "2025-06-30"),
            text_part("isActive", "false"),
        ]);

        let form = OfferForm::from_request(req, &()).await.unwrap();
        assert!(!form.input.is_active);
        assert!(form.input.menu_item_ids.is_empty());
    }

    #[tokio::test]
    async fn test_offer_json_body() {
        let req = json_request(
            r#"{"title":"Two for one","description":"Tuesday","discount":50,
                "menuItemIds":[3],"startDate":"2025-01-01","endDate":"2025-12-31"}"#,
        );

        let form = OfferForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.input.menu_item_ids, vec![3]);
        assert!(form.image_file.is_none());
    }

    #[tokio::test]
    async fn test_json_syntax_error_is_validation() {
        let req = json_request("{not json");
        let err = MenuItemForm::from_request(req, &()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_empty_file_part_is_ignored() {
        let req = multipart_request(&[
            text_part("name", "Plain"),
            text_part("price", "8.0"),
            text_part("category", "Classics"),
            file_part("image", "empty.png", ""),
        ]);

        let form = MenuItemForm::from_request(req, &()).await.unwrap();
        assert!(form.image_file.is_none());
    }
}
