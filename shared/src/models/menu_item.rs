//! Menu Item Model

use serde::{Deserialize, Serialize};

/// Sizes offered when the admin form does not override them
pub const DEFAULT_SIZES: [&str; 4] = ["Small", "Medium", "Large", "Family"];

/// Toppings offered when the admin form does not override them
pub const DEFAULT_TOPPINGS: [&str; 10] = [
    "Extra Cheese",
    "Mushrooms",
    "Pepperoni",
    "Onions",
    "Bell Peppers",
    "Olives",
    "Bacon",
    "Ham",
    "Pineapple",
    "Jalapeños",
];

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Base price; sizes adjust from this (Medium == base)
    pub price: f64,
    /// Category name (resolved from the categories table)
    pub category: String,
    /// Public image path (`/uploads/...`) or external URL
    pub image: Option<String>,
    pub popular: bool,
    /// Ordered size names, as shown on the detail page
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub available_sizes: Vec<String>,
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub available_toppings: Vec<String>,
    /// Active percentage discount (1-100)
    pub discount: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create/replace payload (POST and PUT both submit the full item)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    /// Existing image path to keep; file uploads arrive as a multipart part
    pub image: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default)]
    pub available_sizes: Vec<String>,
    #[serde(default)]
    pub available_toppings: Vec<String>,
    pub discount: Option<i64>,
}

/// Query filters for the menu item list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemFilter {
    pub category: Option<String>,
    pub popular: Option<bool>,
}
