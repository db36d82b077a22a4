//! # Referral Discount
//!
//! Reward computed for a referred customer's order: either a percentage of
//! the order total or a flat amount.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// How a referral reward value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ReferralDiscountKind {
    /// Percentage of the order total.
    Percentage,
    /// Flat amount. Every type other than `percentage` lands here.
    #[serde(other)]
    Flat,
}

impl ReferralDiscountKind {
    /// Parses a backend referral discount type. Only `percentage` (any
    /// case) is a percentage.
    pub fn parse(raw: &str) -> Self {
        if raw.trim().eq_ignore_ascii_case("percentage") {
            ReferralDiscountKind::Percentage
        } else {
            ReferralDiscountKind::Flat
        }
    }
}

/// Returns the referral reward for an order.
///
/// ## Example
/// ```rust
/// use portal_pricing::{compute_referral_discount, ReferralDiscountKind};
///
/// let pct = ReferralDiscountKind::Percentage;
/// assert_eq!(compute_referral_discount(200.0, 10.0, pct), 20.0);
///
/// let flat = ReferralDiscountKind::parse("flat");
/// assert_eq!(compute_referral_discount(200.0, 15.0, flat), 15.0);
/// ```
pub fn compute_referral_discount(
    total_amount: f64,
    discount_value: f64,
    kind: ReferralDiscountKind,
) -> f64 {
    match kind {
        ReferralDiscountKind::Percentage => (discount_value / 100.0) * total_amount,
        ReferralDiscountKind::Flat => discount_value,
    }
}
