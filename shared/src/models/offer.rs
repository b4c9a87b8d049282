//! Offer Model

use serde::{Deserialize, Serialize};

/// Promotional offer entity
///
/// `start_date`/`end_date` are bare `YYYY-MM-DD` strings as submitted by
/// the admin date pickers; an offer is live when `is_active` and today
/// falls inside the window (inclusive).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OfferItem {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    /// Percentage discount granted by the offer (0-100, 0 for deals
    /// described in the text rather than a percentage)
    pub discount: i64,
    /// Menu items the offer applies to (junction table)
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub menu_item_ids: Vec<i64>,
    pub start_date: String,
    pub end_date: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create/replace payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferInput {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub discount: i64,
    #[serde(default)]
    pub menu_item_ids: Vec<i64>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_to_active() {
        let input: OfferInput = serde_json::from_str(
            r#"{"title":"Two for one","description":"Tuesday special","discount":50,
                "startDate":"2025-01-01","endDate":"2025-12-31"}"#,
        )
        .unwrap();
        assert!(input.is_active);
        assert!(input.menu_item_ids.is_empty());
    }
}
