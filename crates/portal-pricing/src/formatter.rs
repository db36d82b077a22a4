//! # Pricing Formatter
//!
//! Holds one [`MonetaryConfig`] snapshot so display code loads the settings
//! once and formats many prices with them.
//!
//! ## User Workflow
//! ```text
//! Backend settings ──► MonetaryConfig ──► PricingFormatter::new
//!                                               │
//!          ┌────────────────────────────────────┼──────────────────────┐
//!          ▼                                    ▼                      ▼
//!   amount(12.5)                discounted_amount(100, 10%)   referral_amount(...)
//!     "$12.50"                         "$90.00"                   "$20.00"
//! ```

use crate::amount::AmountInput;
use crate::config::MonetaryConfig;
use crate::discount::DiscountSpec;
use crate::format::format_amount;
use crate::referral::{compute_referral_discount, ReferralDiscountKind};

/// Formats amounts against a fixed configuration snapshot.
///
/// ## Example
/// ```rust
/// use portal_pricing::{
///     DiscountKind, DiscountSpec, MonetaryConfig, PricingFormatter, SymbolPosition,
/// };
///
/// let formatter = PricingFormatter::new(MonetaryConfig::new(2, "$", SymbolPosition::Left));
///
/// assert_eq!(formatter.amount(12.5, true), "$12.50");
///
/// let ten_off = DiscountSpec::new(10.0, DiscountKind::Percent);
/// assert_eq!(formatter.discounted_amount(100.0, &ten_off, None, true), "$90.00");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PricingFormatter {
    config: MonetaryConfig,
}

impl PricingFormatter {
    pub fn new(config: MonetaryConfig) -> Self {
        PricingFormatter { config }
    }

    /// The snapshot this formatter uses.
    #[inline]
    pub fn config(&self) -> &MonetaryConfig {
        &self.config
    }

    /// Formats a raw amount. See [`format_amount`].
    pub fn amount(&self, amount: impl Into<AmountInput>, use_decimal: bool) -> String {
        format_amount(amount, use_decimal, &self.config)
    }

    /// Formats a price after its discount.
    ///
    /// An invalid price still renders as `""`.
    pub fn discounted_amount(
        &self,
        price: impl Into<AmountInput>,
        discount: &DiscountSpec,
        quantity: Option<u32>,
        use_decimal: bool,
    ) -> String {
        let price = price.into();
        match price.to_finite() {
            Ok(value) => self.amount(discount.apply(value, quantity), use_decimal),
            // Let format_amount log and blank it out
            Err(_) => self.amount(price, use_decimal),
        }
    }

    /// Formats the referral reward for an order total.
    pub fn referral_amount(
        &self,
        total_amount: f64,
        discount_value: f64,
        kind: ReferralDiscountKind,
        use_decimal: bool,
    ) -> String {
        self.amount(
            compute_referral_discount(total_amount, discount_value, kind),
            use_decimal,
        )
    }
}

impl From<MonetaryConfig> for PricingFormatter {
    fn from(config: MonetaryConfig) -> Self {
        PricingFormatter::new(config)
    }
}
