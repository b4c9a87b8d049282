//! Client-side shopping cart
//!
//! Collects configured menu items before checkout. Lines merge when the
//! same item is added with the same size and toppings (topping order
//! does not matter). All money math goes through [`shared::pricing`],
//! so the cart total matches what the server would compute.

use crate::error::{ClientError, ClientResult};
use shared::models::{MenuItem, OrderInput, OrderItemInput, OrderType};
use shared::pricing;

/// One configured item in the cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub menu_item_id: i64,
    pub name: String,
    /// The item's stored (Medium) price; size and toppings adjust from it
    pub base_price: f64,
    pub size: Option<String>,
    pub toppings: Vec<String>,
    pub discount: Option<i64>,
    pub quantity: i64,
}

impl CartLine {
    fn quote(&self) -> pricing::LineQuote {
        pricing::quote_line(
            self.base_price,
            self.size.as_deref(),
            self.toppings.len(),
            self.discount,
            self.quantity,
        )
    }

    /// Price per unit with size, toppings and discount applied
    pub fn unit_price(&self) -> f64 {
        self.quote().unit_price
    }

    /// unit price * quantity
    pub fn line_total(&self) -> f64 {
        self.quote().line_total
    }

    fn matches(&self, menu_item_id: i64, size: Option<&str>, toppings: &[String]) -> bool {
        self.menu_item_id == menu_item_id
            && self.size.as_deref() == size
            && sorted(&self.toppings) == sorted(toppings)
    }
}

fn sorted(toppings: &[String]) -> Vec<&str> {
    let mut names: Vec<&str> = toppings.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Customer details collected at checkout
#[derive(Debug, Clone)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub order_type: OrderType,
    pub special_instructions: Option<String>,
}

/// Shopping cart
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Add a configured item. Merges into an existing line when item,
    /// size and toppings all match.
    pub fn add(&mut self, item: &MenuItem, size: Option<&str>, toppings: &[String], quantity: i64) {
        if quantity <= 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.matches(item.id, size, toppings))
        {
            line.quantity += quantity;
            return;
        }
        self.lines.push(CartLine {
            menu_item_id: item.id,
            name: item.name.clone(),
            base_price: item.price,
            size: size.map(str::to_string),
            toppings: toppings.to_vec(),
            discount: item.discount,
            quantity,
        });
    }

    /// Set a line's quantity; zero or less removes the line
    pub fn set_quantity(&mut self, index: usize, quantity: i64) {
        if index >= self.lines.len() {
            return;
        }
        if quantity <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }
    }

    pub fn remove(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line totals, before any delivery fee
    pub fn subtotal(&self) -> f64 {
        let totals: Vec<f64> = self.lines.iter().map(CartLine::line_total).collect();
        pricing::order_total(&totals, &OrderType::Takeaway)
    }

    /// Subtotal plus the delivery fee when applicable
    pub fn total(&self, order_type: &OrderType) -> f64 {
        let totals: Vec<f64> = self.lines.iter().map(CartLine::line_total).collect();
        pricing::order_total(&totals, order_type)
    }

    /// Turn the cart into a checkout payload.
    ///
    /// Fails on an empty cart and on delivery orders without an address.
    pub fn to_order_input(&self, details: &CustomerDetails) -> ClientResult<OrderInput> {
        if self.lines.is_empty() {
            return Err(ClientError::Validation("Cart is empty".to_string()));
        }
        if details.order_type == OrderType::Delivery
            && details
                .address
                .as_deref()
                .is_none_or(|a| a.trim().is_empty())
        {
            return Err(ClientError::Validation(
                "Delivery orders require an address".to_string(),
            ));
        }

        let order_items = self
            .lines
            .iter()
            .map(|line| OrderItemInput {
                menu_item_id: line.menu_item_id,
                name: line.name.clone(),
                price: line.unit_price(),
                quantity: line.quantity,
                size: line.size.clone(),
                toppings: line.toppings.clone(),
            })
            .collect();

        Ok(OrderInput {
            customer_name: details.name.clone(),
            customer_phone: details.phone.clone(),
            customer_address: details.address.clone(),
            order_type: details.order_type,
            order_items,
            total_amount: self.total(&details.order_type),
            special_instructions: details.special_instructions.clone(),
        })
    }
}
