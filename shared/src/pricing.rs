//! Menu price quoting
//!
//! Computes the price a customer pays for one configured menu item:
//! base price, plus a size adjustment, plus a flat per-topping surcharge,
//! minus the item's percentage discount.
//!
//! Uses rust_decimal internally; f64 at the boundaries, rounded to two
//! decimal places half-up.

use crate::models::OrderType;
use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Flat surcharge per selected topping
pub const TOPPING_SURCHARGE: f64 = 1.50;

/// Flat fee added to delivery orders
pub const DELIVERY_FEE: f64 = 3.00;

/// Price adjustment for a named size. The stored base price is the
/// Medium price; unknown sizes fall back to the base.
pub fn size_adjustment(size: &str) -> f64 {
    match size {
        "Small" => -2.00,
        "Medium" => 0.00,
        "Large" => 3.00,
        "Family" => 6.00,
        _ => 0.00,
    }
}

/// Delivery fee for an order type
pub fn delivery_fee(order_type: &OrderType) -> f64 {
    match order_type {
        OrderType::Delivery => DELIVERY_FEE,
        OrderType::Takeaway => 0.00,
    }
}

/// Result of quoting one order line
#[derive(Debug, Clone, PartialEq)]
pub struct LineQuote {
    /// Base price + size adjustment + topping surcharges, before discount
    pub gross_unit: f64,
    /// Discount amount per unit
    pub discount_amount: f64,
    /// Final price per unit
    pub unit_price: f64,
    /// unit_price * quantity (rounded once, from the unrounded unit)
    pub line_total: f64,
}

/// Convert f64 to Decimal for calculation
#[inline]
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Quote one order line.
///
/// * `base_price` - the menu item's stored (Medium) price
/// * `size` - selected size name, `None` for single-size items
/// * `topping_count` - number of selected extra toppings
/// * `discount_percent` - the item's active discount percentage, if any
/// * `quantity` - units ordered (must be >= 1 for a meaningful total)
pub fn quote_line(
    base_price: f64,
    size: Option<&str>,
    topping_count: usize,
    discount_percent: Option<i64>,
    quantity: i64,
) -> LineQuote {
    let hundred = Decimal::ONE_HUNDRED;

    let base = to_decimal(base_price);
    let adjustment = to_decimal(size.map(size_adjustment).unwrap_or(0.0));
    let toppings = to_decimal(TOPPING_SURCHARGE) * Decimal::from(topping_count as i64);

    let gross = (base + adjustment + toppings).max(Decimal::ZERO);

    let discount = match discount_percent {
        Some(pct) if pct > 0 => gross * Decimal::from(pct) / hundred,
        _ => Decimal::ZERO,
    };
    let unit = (gross - discount).max(Decimal::ZERO);

    LineQuote {
        gross_unit: to_f64(gross),
        discount_amount: to_f64(discount),
        unit_price: to_f64(unit),
        line_total: to_f64(unit * Decimal::from(quantity)),
    }
}

/// Order total: sum of line totals plus the delivery fee when applicable.
pub fn order_total(line_totals: &[f64], order_type: &OrderType) -> f64 {
    let subtotal = line_totals
        .iter()
        .fold(Decimal::ZERO, |acc, t| acc + to_decimal(*t));
    to_f64(subtotal + to_decimal(delivery_fee(order_type)))
}
