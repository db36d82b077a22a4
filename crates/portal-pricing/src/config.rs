//! # Monetary Configuration
//!
//! The read-only snapshot every formatting call is given.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Backend business settings (JSON)  ──► MonetaryConfig::from_json        │
//! │  Environment / key-value lookup    ──► MonetaryConfig::from_lookup      │
//! │  Nothing supplied                  ──► MonetaryConfig::default()        │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                         &MonetaryConfig passed into each call           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The snapshot is never cached or fetched by this crate. Callers load it
//! once and pass it explicitly, so there is no hidden dependency on a store.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ConfigError;
use crate::validation::validate_decimal_digits;
use crate::DEFAULT_DECIMAL_DIGITS;

/// Lookup key for the number of fractional digits.
pub const ENV_DECIMAL_DIGITS: &str = "PORTAL_DECIMAL_DIGITS";
/// Lookup key for the currency symbol.
pub const ENV_CURRENCY_SYMBOL: &str = "PORTAL_CURRENCY_SYMBOL";
/// Lookup key for the symbol position (`left` or `right`).
pub const ENV_CURRENCY_POSITION: &str = "PORTAL_CURRENCY_POSITION";

// =============================================================================
// Symbol Position
// =============================================================================

/// Which side of the number the currency symbol is written on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    /// `$12.00`
    #[default]
    Left,
    /// `12.00€`
    Right,
}

impl SymbolPosition {
    /// Parses `left` / `right`, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "left" => Some(SymbolPosition::Left),
            "right" => Some(SymbolPosition::Right),
            _ => None,
        }
    }
}

// =============================================================================
// Monetary Config
// =============================================================================

/// Display settings for monetary amounts.
///
/// Deserializes from either this type's own camelCase form or the backend's
/// business-settings keys. Absent fields fall back to [`Default`].
///
/// ## Example
/// ```rust
/// use portal_pricing::{MonetaryConfig, SymbolPosition};
///
/// let config = MonetaryConfig::from_json(
///     r#"{"currency_symbol": "৳", "currency_symbol_direction": "right",
///         "digit_after_decimal_point": "3"}"#,
/// ).unwrap();
///
/// assert_eq!(config.decimal_digits, 3);
/// assert_eq!(config.currency_symbol, "৳");
/// assert_eq!(config.symbol_position, SymbolPosition::Right);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct MonetaryConfig {
    /// Fractional digits shown when decimals are requested.
    #[serde(alias = "digit_after_decimal_point", alias = "decimal_digits")]
    #[serde(deserialize_with = "deserialize_decimal_digits")]
    pub decimal_digits: u32,

    /// Symbol written next to the number. May be empty.
    #[serde(alias = "currency_symbol")]
    #[serde(deserialize_with = "null_as_default")]
    pub currency_symbol: String,

    /// Side of the number the symbol goes on.
    #[serde(alias = "currency_symbol_direction", alias = "symbol_position")]
    #[serde(deserialize_with = "null_as_default")]
    pub symbol_position: SymbolPosition,
}

impl Default for MonetaryConfig {
    /// Two fractional digits, no symbol, symbol on the left.
    fn default() -> Self {
        MonetaryConfig {
            decimal_digits: DEFAULT_DECIMAL_DIGITS,
            currency_symbol: String::new(),
            symbol_position: SymbolPosition::Left,
        }
    }
}

impl MonetaryConfig {
    /// Creates a config from explicit values.
    pub fn new(
        decimal_digits: u32,
        currency_symbol: impl Into<String>,
        symbol_position: SymbolPosition,
    ) -> Self {
        MonetaryConfig {
            decimal_digits,
            currency_symbol: currency_symbol.into(),
            symbol_position,
        }
    }

    /// Parses a backend business-settings payload.
    ///
    /// Unknown keys are ignored so the whole settings object can be passed in.
    pub fn from_json(payload: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Builds a config from a key-value lookup, starting from defaults.
    ///
    /// ## Keys
    /// - `PORTAL_DECIMAL_DIGITS`: fractional digits (0-28)
    /// - `PORTAL_CURRENCY_SYMBOL`: symbol, used verbatim
    /// - `PORTAL_CURRENCY_POSITION`: `left` or `right`
    ///
    /// Unset keys keep their default. Set but malformed keys are errors.
    ///
    /// ## Example
    /// ```rust
    /// use portal_pricing::{MonetaryConfig, SymbolPosition};
    ///
    /// let config = MonetaryConfig::from_lookup(|key| match key {
    ///     "PORTAL_CURRENCY_SYMBOL" => Some("€".to_string()),
    ///     "PORTAL_CURRENCY_POSITION" => Some("right".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(config.decimal_digits, 2);
    /// assert_eq!(config.symbol_position, SymbolPosition::Right);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = MonetaryConfig::default();

        if let Some(raw) = lookup(ENV_DECIMAL_DIGITS) {
            let digits = raw
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_DECIMAL_DIGITS.to_string(),
                    value: raw.clone(),
                })?;
            validate_decimal_digits(digits)?;
            config.decimal_digits = digits;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            config.currency_symbol = symbol;
        }

        if let Some(raw) = lookup(ENV_CURRENCY_POSITION) {
            config.symbol_position =
                SymbolPosition::parse(&raw).ok_or_else(|| ConfigError::InvalidValue {
                    key: ENV_CURRENCY_POSITION.to_string(),
                    value: raw.clone(),
                })?;
        }

        Ok(config)
    }
}

/// Reads `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts digits as a JSON number or numeric string (`2` or `"2"`).
/// `null` means the default.
fn deserialize_decimal_digits<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DigitsRepr {
        Number(u32),
        Text(String),
    }

    let digits = match Option::<DigitsRepr>::deserialize(deserializer)? {
        None => DEFAULT_DECIMAL_DIGITS,
        Some(DigitsRepr::Number(n)) => n,
        Some(DigitsRepr::Text(s)) => s.trim().parse::<u32>().map_err(|_| {
            <D::Error as de::Error>::custom(format!("invalid decimal digits '{s}'"))
        })?,
    };

    validate_decimal_digits(digits).map_err(<D::Error as de::Error>::custom)?;
    Ok(digits)
}

// =============================================================================
// Unit Tests
// =============================================================================
