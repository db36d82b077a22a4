//! Quote files and how they are rendered.
//!
//! ## Quote Shape
//! ```json
//! {
//!   "items": [
//!     { "name": "Burger", "price": 12.5, "quantity": 2,
//!       "discount": { "value": 10, "kind": "percent" },
//!       "addOns": [{ "name": "Cheese", "isChecked": true }] }
//!   ],
//!   "referral": { "value": 10, "kind": "percentage" }
//! }
//! ```
//!
//! `price` is the line price. Items whose price is not a number still print,
//! with blank amounts, and are left out of the total.

use portal_pricing::{
    join_selected_add_ons, AddOn, AmountInput, DiscountSpec, PricingFormatter,
    ReferralDiscountKind,
};
use serde::Deserialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    pub items: Vec<QuoteItem>,
    #[serde(default)]
    pub referral: Option<ReferralSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteItem {
    pub name: String,
    #[serde(default)]
    pub price: AmountInput,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub discount: Option<DiscountSpec>,
    #[serde(default, alias = "add_ons")]
    pub add_ons: Vec<AddOn>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ReferralSpec {
    pub value: f64,
    pub kind: ReferralDiscountKind,
}

/// Renders one line per item, then the total and the referral reward.
pub fn render_quote(quote: &Quote, formatter: &PricingFormatter) -> Vec<String> {
    let mut lines = Vec::with_capacity(quote.items.len() + 2);
    let mut total = 0.0;

    for item in &quote.items {
        lines.push(render_item(item, formatter));

        match item.price.to_finite() {
            Ok(price) => total += discounted(item, price),
            Err(error) => warn!(item = %item.name, error = %error, "Item left out of total"),
        }
    }

    lines.push(format!("Total: {}", formatter.amount(total, true)));

    if let Some(referral) = quote.referral {
        debug!(total, value = referral.value, kind = ?referral.kind, "Computing referral reward");
        lines.push(format!(
            "Referral reward: {}",
            formatter.referral_amount(total, referral.value, referral.kind, true)
        ));
    }

    lines
}

fn render_item(item: &QuoteItem, formatter: &PricingFormatter) -> String {
    let quantity = item.quantity.unwrap_or(1).max(1);
    let base = formatter.amount(&item.price, true);
    let mut line = format!("{} x{}: {}", item.name, quantity, base);

    // Rejected prices render blank and get no discounted amount
    if let Some(discount) = item.discount.filter(|_| !base.is_empty()) {
        line.push_str(" -> ");
        line.push_str(&formatter.discounted_amount(&item.price, &discount, item.quantity, true));
    }

    let add_ons = join_selected_add_ons(&item.add_ons);
    if !add_ons.is_empty() {
        line.push_str(&format!(" [{add_ons}]"));
    }

    line
}

fn discounted(item: &QuoteItem, price: f64) -> f64 {
    item.discount
        .map(|discount| discount.apply(price, item.quantity))
        .unwrap_or(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_pricing::{MonetaryConfig, SymbolPosition};

    fn dollars() -> PricingFormatter {
        PricingFormatter::new(MonetaryConfig::new(2, "$", SymbolPosition::Left))
    }

    #[test]
    fn test_render_quote() {
        let quote: Quote = serde_json::from_str(
            r#"{
                "items": [
                    {"name": "Burger", "price": 100, "quantity": 2,
                     "discount": {"value": 10, "kind": "amount"},
                     "addOns": [{"name": "Cheese", "isChecked": true},
                                {"name": "Bacon", "isChecked": false},
                                {"name": "Sauce", "isChecked": true}]},
                    {"name": "Soda", "price": "20"}
                ],
                "referral": {"value": 10, "kind": "percentage"}
            }"#,
        )
        .unwrap();

        let lines = render_quote(&quote, &dollars());
        assert_eq!(
            lines,
            vec![
                "Burger x2: $100.00 -> $80.00 [Cheese, Sauce]",
                "Soda x1: $20.00",
                "Total: $100.00",
                "Referral reward: $10.00",
            ]
        );
    }

    #[test]
    fn test_invalid_price_left_out_of_total() {
        let quote: Quote = serde_json::from_str(
            r#"{"items": [
                {"name": "Mystery", "price": null,
                 "discount": {"value": 5, "kind": "percent"}},
                {"name": "Tea", "price": 3.5}
            ]}"#,
        )
        .unwrap();

        let lines = render_quote(&quote, &dollars());
        assert_eq!(lines, vec!["Mystery x1: ", "Tea x1: $3.50", "Total: $3.50"]);
    }

    #[test]
    fn test_unparseable_price_with_discount_has_no_arrow() {
        let quote: Quote = serde_json::from_str(
            r#"{"items": [
                {"name": "Gift", "price": "free", "quantity": 2,
                 "discount": {"value": 1, "kind": "amount"},
                 "addOns": [{"name": "Wrap", "isChecked": true}]}
            ]}"#,
        )
        .unwrap();

        let lines = render_quote(&quote, &dollars());
        assert_eq!(lines, vec!["Gift x2:  [Wrap]", "Total: $0.00"]);
    }
}
