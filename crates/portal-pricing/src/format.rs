//! # Amount Formatter
//!
//! Turns a raw amount into the string the portal shows next to a product.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AmountInput ──► to_decimal() ──┬── use_decimal: round N digits ──┐    │
//! │       │                         └── otherwise:   truncate ────────┤    │
//! │       │ invalid                                                    ▼    │
//! │       ▼                                             attach symbol       │
//! │      ""                                          ($12.35 or 12.35$)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding
//! Rounding is half away from zero on the shortest decimal text of the
//! number: `12.345` → `12.35`, `-2.5` (0 digits) → `-3`.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, trace};

use crate::amount::AmountInput;
use crate::config::{MonetaryConfig, SymbolPosition};
use crate::error::AmountError;
use crate::MAX_DECIMAL_DIGITS;

/// Formats an amount with the configured currency symbol.
///
/// - Missing, non-numeric, or non-finite amounts yield `""`.
/// - `use_decimal`: round to `config.decimal_digits` and always show that
///   many fractional digits. Otherwise truncate toward zero.
/// - The symbol goes before or after the number per `config.symbol_position`.
///
/// ## Example
/// ```rust
/// use portal_pricing::{format_amount, MonetaryConfig, SymbolPosition};
///
/// let left = MonetaryConfig::new(2, "$", SymbolPosition::Left);
/// assert_eq!(format_amount(12.345, true, &left), "$12.35");
///
/// let right = MonetaryConfig::new(2, "$", SymbolPosition::Right);
/// assert_eq!(format_amount(12.345, false, &right), "12$");
///
/// assert_eq!(format_amount("abc", true, &left), "");
/// assert_eq!(format_amount(None::<f64>, true, &left), "");
/// ```
pub fn format_amount(
    amount: impl Into<AmountInput>,
    use_decimal: bool,
    config: &MonetaryConfig,
) -> String {
    let amount = amount.into();

    match render_number(&amount, use_decimal, config.decimal_digits) {
        Ok(number) => attach_symbol(&number, config),
        Err(error) => {
            debug!(error = %error, amount = ?amount, "Amount rejected, rendering empty");
            String::new()
        }
    }
}

/// Renders the numeric part only, without any symbol.
fn render_number(
    amount: &AmountInput,
    use_decimal: bool,
    decimal_digits: u32,
) -> Result<String, AmountError> {
    let value = amount.to_decimal()?;

    let places = if use_decimal {
        decimal_digits.min(MAX_DECIMAL_DIGITS)
    } else {
        0
    };

    let mut shown = if use_decimal {
        value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
    } else {
        value.trunc()
    };

    // -0.001 rounds to a negative zero; show it as plain zero
    if shown.is_zero() {
        shown.set_sign_positive(true);
    }

    trace!(%value, %shown, places, "Rendered amount");
    Ok(fixed_places(shown, places))
}

/// Writes `value` with exactly `places` fractional digits.
///
/// Pads by hand: `Decimal`'s precision formatting has a fixed buffer and
/// cannot hold 28 fractional digits behind a long integer part.
fn fixed_places(value: Decimal, places: u32) -> String {
    let mut text = value.to_string();
    let places = places as usize;

    let written = match text.find('.') {
        Some(dot) => text.len() - dot - 1,
        None => {
            if places > 0 {
                text.push('.');
            }
            0
        }
    };

    text.extend(std::iter::repeat('0').take(places.saturating_sub(written)));
    text
}

fn attach_symbol(number: &str, config: &MonetaryConfig) -> String {
    match config.symbol_position {
        SymbolPosition::Left => format!("{}{}", config.currency_symbol, number),
        SymbolPosition::Right => format!("{}{}", number, config.currency_symbol),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars_left() -> MonetaryConfig {
        MonetaryConfig::new(2, "$", SymbolPosition::Left)
    }

    fn dollars_right() -> MonetaryConfig {
        MonetaryConfig::new(2, "$", SymbolPosition::Right)
    }

    #[test]
    fn test_invalid_amounts_render_empty() {
        let config = dollars_left();
        assert_eq!(format_amount(AmountInput::Missing, true, &config), "");
        assert_eq!(format_amount(None::<f64>, true, &config), "");
        assert_eq!(format_amount("abc", true, &config), "");
        assert_eq!(format_amount("", false, &config), "");
        assert_eq!(format_amount(f64::NAN, true, &config), "");
        assert_eq!(format_amount(f64::NEG_INFINITY, false, &config), "");
        assert_eq!(format_amount(1e30, true, &config), "");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        let config = dollars_left();
        assert_eq!(format_amount(12.345, true, &config), "$12.35");
        assert_eq!(format_amount(12.344, true, &config), "$12.34");
        assert_eq!(format_amount(1.005, true, &config), "$1.01");
        assert_eq!(format_amount(-12.345, true, &config), "$-12.35");
    }

    #[test]
    fn test_pads_fractional_digits() {
        let config = dollars_left();
        assert_eq!(format_amount(12_i32, true, &config), "$12.00");
        assert_eq!(format_amount(0.5, true, &config), "$0.50");
        assert_eq!(format_amount(0.1 + 0.2, true, &config), "$0.30");
    }

    #[test]
    fn test_truncates_without_decimal() {
        assert_eq!(format_amount(12.345, false, &dollars_right()), "12$");
        assert_eq!(format_amount(12.999, false, &dollars_left()), "$12");
        assert_eq!(format_amount(-12.7, false, &dollars_left()), "$-12");
    }

    #[test]
    fn test_zero_has_no_sign() {
        let config = dollars_left();
        assert_eq!(format_amount(-0.001, true, &config), "$0.00");
        assert_eq!(format_amount(-0.5, false, &config), "$0");
        assert_eq!(format_amount(-0.0, true, &config), "$0.00");
    }

    #[test]
    fn test_symbol_position() {
        let euro = MonetaryConfig::new(2, "€", SymbolPosition::Right);
        assert_eq!(format_amount(9.9, true, &euro), "9.90€");

        let taka = MonetaryConfig::new(2, "৳", SymbolPosition::Left);
        assert_eq!(format_amount(9.9, true, &taka), "৳9.90");
    }

    #[test]
    fn test_default_config() {
        let config = MonetaryConfig::default();
        assert_eq!(format_amount(3.14159, true, &config), "3.14");
        assert_eq!(format_amount(3.14159, false, &config), "3");
    }

    #[test]
    fn test_other_precisions() {
        let none = MonetaryConfig::new(0, "¥", SymbolPosition::Left);
        assert_eq!(format_amount(2.5, true, &none), "¥3");
        assert_eq!(format_amount(-2.5, true, &none), "¥-3");

        let three = MonetaryConfig::new(3, "KD", SymbolPosition::Right);
        assert_eq!(format_amount(1.2345, true, &three), "1.235KD");
        assert_eq!(format_amount(7_u32, true, &three), "7.000KD");
    }

    #[test]
    fn test_excess_precision_is_clamped() {
        let config = MonetaryConfig::new(40, "", SymbolPosition::Left);
        let rendered = format_amount(1.5, true, &config);
        assert_eq!(rendered, format!("1.5{}", "0".repeat(27)));
    }

    #[test]
    fn test_long_integer_part_at_high_precision() {
        let cases = [(28, 1e3, "1000"), (24, 1e7, "10000000"), (20, 1e11, "100000000000")];
        for (digits, amount, integer) in cases {
            let config = MonetaryConfig::new(digits, "", SymbolPosition::Left);
            let expected = format!("{integer}.{}", "0".repeat(digits as usize));
            assert_eq!(format_amount(amount, true, &config), expected);
        }

        let config = MonetaryConfig::new(28, "", SymbolPosition::Left);
        let rendered = format_amount(1e20, true, &config);
        assert_eq!(rendered, format!("1{}.{}", "0".repeat(20), "0".repeat(28)));

        let config = MonetaryConfig::new(10, "€", SymbolPosition::Right);
        let rendered = format_amount(1e21, true, &config);
        assert_eq!(rendered, format!("1{}.{}€", "0".repeat(21), "0".repeat(10)));
        assert_eq!(format_amount(-1e21, false, &config), format!("-1{}€", "0".repeat(21)));
    }

    #[test]
    fn test_text_amounts() {
        let config = dollars_left();
        assert_eq!(format_amount(" 42.1 ", true, &config), "$42.10");
        assert_eq!(format_amount("42.1".to_string(), false, &config), "$42");
    }

    #[test]
    fn test_inputs_are_untouched() {
        let config = dollars_left();
        let amount = AmountInput::from("12.345");
        let before = (amount.clone(), config.clone());
        let _ = format_amount(&amount, true, &config);
        assert_eq!((amount, config), before);
    }
}
