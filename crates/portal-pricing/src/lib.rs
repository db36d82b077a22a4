//! # portal-pricing: Pure Pricing Logic for the Delivery Portal
//!
//! Amount formatting and discount math behind every price the portal shows
//! for food, grocery, pharmacy, parcel, and rental orders.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Portal Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Portal (display layer)                   │   │
//! │  │    Product card ──► Cart ──► Checkout ──► Referral banner      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ strings / numbers                      │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ portal-pricing (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  format   │  │ discount  │  │ referral  │  │   addon   │  │   │
//! │  │   │ $12.35    │  │ price-10% │  │ 10% / $15 │  │ "A, B"    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────▲───────────────────────────────────┘   │
//! │                                │ MonetaryConfig snapshot                │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │             Backend business settings (owned elsewhere)         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - `MonetaryConfig` snapshot (digits, symbol, position)
//! - [`amount`] - Raw amounts as they arrive (number, string, null)
//! - [`format`] - `format_amount`
//! - [`discount`] - `apply_discount`, `DiscountKind`
//! - [`referral`] - `compute_referral_discount`
//! - [`addon`] - `join_selected_add_ons`
//! - [`formatter`] - `PricingFormatter`, one snapshot for many calls
//! - [`error`] - Error types
//! - [`validation`] - Config bounds
//!
//! ## Design Principles
//!
//! 1. **Total functions**: the four operations never panic and never return
//!    errors. Bad amounts render as `""`, unknown discount kinds are no-ops.
//! 2. **Explicit config**: the caller passes the snapshot in. Nothing here
//!    reads a store or the environment.
//! 3. **Exact display rounding**: rounding happens on decimals, not floats.
//!
//! ## Example Usage
//!
//! ```rust
//! use portal_pricing::{
//!     apply_discount, format_amount, DiscountKind, MonetaryConfig, SymbolPosition,
//! };
//!
//! let config = MonetaryConfig::new(2, "$", SymbolPosition::Left);
//!
//! let price = apply_discount(100.0, 10.0, DiscountKind::Amount, Some(2));
//! assert_eq!(format_amount(price, true, &config), "$80.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod addon;
pub mod amount;
pub mod config;
pub mod discount;
pub mod error;
pub mod format;
pub mod formatter;
pub mod referral;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use addon::{join_selected_add_ons, AddOn};
pub use amount::AmountInput;
pub use config::{MonetaryConfig, SymbolPosition};
pub use discount::{apply_discount, DiscountKind, DiscountSpec};
pub use error::{AmountError, ConfigError, PricingError, PricingResult, ValidationError};
pub use format::format_amount;
pub use formatter::PricingFormatter;
pub use referral::{compute_referral_discount, ReferralDiscountKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fractional digits used when the backend does not say.
pub const DEFAULT_DECIMAL_DIGITS: u32 = 2;

/// Largest scale the decimal engine can represent.
pub const MAX_DECIMAL_DIGITS: u32 = 28;
