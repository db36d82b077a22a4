//! # Discount Calculator
//!
//! Applies a product discount to a price.
//!
//! ## Formulas
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  discount <= 0           → price                                        │
//! │  Amount                  → price - discount × quantity                  │
//! │  Percent / Fixed         → price - (discount / 100) × price             │
//! │  Unrecognized            → price                                        │
//! │                                                                         │
//! │  Quantity only scales the Amount variant. A percentage of a line       │
//! │  price is already proportional to that line.                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Results are not clamped: a flat discount larger than the price goes
//! negative and the caller decides what to show.

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    /// Flat amount off each unit.
    Amount,
    /// Percentage of the price.
    Percent,
    /// Percentage of the price, as the backend labels some promotions.
    Fixed,
    /// Anything else the backend sends. Leaves the price alone.
    #[serde(other)]
    Unrecognized,
}

impl DiscountKind {
    /// Parses a backend discount type, ignoring case and whitespace.
    ///
    /// ```rust
    /// use portal_pricing::DiscountKind;
    ///
    /// assert_eq!(DiscountKind::parse("Percent"), DiscountKind::Percent);
    /// assert_eq!(DiscountKind::parse("bogo"), DiscountKind::Unrecognized);
    /// ```
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "amount" => DiscountKind::Amount,
            "percent" => DiscountKind::Percent,
            "fixed" => DiscountKind::Fixed,
            _ => DiscountKind::Unrecognized,
        }
    }
}

/// A discount as attached to a product by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountSpec {
    /// Flat amount or percentage, depending on `kind`.
    #[serde(alias = "discount")]
    pub value: f64,

    #[serde(alias = "discount_type")]
    pub kind: DiscountKind,
}

impl DiscountSpec {
    pub const fn new(value: f64, kind: DiscountKind) -> Self {
        DiscountSpec { value, kind }
    }

    /// Applies this discount to `price`. See [`apply_discount`].
    pub fn apply(&self, price: f64, quantity: Option<u32>) -> f64 {
        apply_discount(price, self.value, self.kind, quantity)
    }
}

/// Returns `price` after the discount.
///
/// `quantity` defaults to 1 when absent or zero and only affects
/// [`DiscountKind::Amount`].
///
/// ## Example
/// ```rust
/// use portal_pricing::{apply_discount, DiscountKind};
///
/// assert_eq!(apply_discount(100.0, 0.0, DiscountKind::Amount, Some(1)), 100.0);
/// assert_eq!(apply_discount(100.0, 10.0, DiscountKind::Amount, Some(2)), 80.0);
/// assert_eq!(apply_discount(100.0, 10.0, DiscountKind::Percent, Some(5)), 90.0);
/// ```
pub fn apply_discount(
    price: f64,
    discount: f64,
    kind: DiscountKind,
    quantity: Option<u32>,
) -> f64 {
    if discount.is_nan() || discount <= 0.0 {
        return price;
    }

    match kind {
        DiscountKind::Amount => price - discount * effective_quantity(quantity),
        DiscountKind::Percent | DiscountKind::Fixed => price - (discount / 100.0) * price,
        DiscountKind::Unrecognized => {
            debug!(discount, "Unrecognized discount kind, price unchanged");
            price
        }
    }
}

fn effective_quantity(quantity: Option<u32>) -> f64 {
    match quantity {
        None | Some(0) => 1.0,
        Some(n) => n as f64,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
