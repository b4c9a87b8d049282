//! Offline fallback dataset
//!
//! A small representative menu served when the API cannot be reached at
//! all, so the storefront still renders something sensible. Served only
//! on connectivity failures; server-reported errors propagate to the
//! caller unchanged.

use shared::models::{Category, MenuItem, OfferItem};
use shared::models::{DEFAULT_SIZES, DEFAULT_TOPPINGS};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn pizza(id: i64, name: &str, description: &str, price: f64, popular: bool) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: "Classics".to_string(),
        image: Some(format!(
            "/images/fallback/{}.jpg",
            name.to_lowercase().replace(' ', "-")
        )),
        popular,
        available_sizes: strings(&DEFAULT_SIZES),
        available_toppings: strings(&DEFAULT_TOPPINGS),
        discount: None,
        created_at: 0,
        updated_at: 0,
    }
}

fn simple(id: i64, name: &str, description: &str, price: f64, category: &str) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: None,
        popular: false,
        available_sizes: vec![],
        available_toppings: vec![],
        discount: None,
        created_at: 0,
        updated_at: 0,
    }
}

/// The bundled menu
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        pizza(1, "Margherita", "Tomato, mozzarella and fresh basil", 8.5, true),
        pizza(2, "Diavola", "Spicy salami, chili and tomato", 10.5, true),
        pizza(3, "Quattro Formaggi", "Four cheeses on a white base", 11.5, false),
        pizza(4, "Capricciosa", "Ham, mushrooms, artichokes and olives", 11.0, false),
        simple(5, "Tiramisu", "Mascarpone, espresso and cocoa", 5.0, "Desserts"),
        simple(6, "Lemonade", "Fresh pressed, lightly sparkling", 3.0, "Drinks"),
    ]
}

/// The bundled offer, open-ended so it is considered live offline
pub fn offers() -> Vec<OfferItem> {
    vec![OfferItem {
        id: 1,
        title: "Family Weekend".to_string(),
        description: "20% off all family size pizzas, Friday to Sunday".to_string(),
        image_url: None,
        discount: 20,
        menu_item_ids: vec![1, 2, 3, 4],
        start_date: "2024-01-01".to_string(),
        end_date: "2099-12-31".to_string(),
        is_active: true,
        created_at: 0,
        updated_at: 0,
    }]
}

/// Distinct categories of the bundled menu, in menu order
pub fn categories() -> Vec<Category> {
    let mut seen: Vec<String> = Vec::new();
    for item in menu_items() {
        if !seen.contains(&item.category) {
            seen.push(item.category);
        }
    }
    seen.into_iter()
        .enumerate()
        .map(|(i, name)| Category {
            id: (i + 1) as i64,
            name,
        })
        .collect()
}
