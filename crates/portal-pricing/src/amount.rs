//! # Raw Amounts
//!
//! Prices reach the portal from the backend as JSON numbers, numeric strings,
//! or `null`. [`AmountInput`] keeps that shape until the moment a number is
//! needed, and [`AmountInput::to_finite`] decides whether it is usable.

use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AmountError;

/// An amount as it arrived, before validation.
///
/// ## Example
/// ```rust
/// use portal_pricing::AmountInput;
///
/// assert_eq!(AmountInput::from(12.5).to_finite(), Ok(12.5));
/// assert_eq!(AmountInput::from(" 7 ").to_finite(), Ok(7.0));
/// assert!(AmountInput::from("abc").to_finite().is_err());
/// assert!(AmountInput::from(None::<f64>).to_finite().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// A JSON number.
    Number(f64),
    /// A string that may hold a number.
    Text(String),
    /// `null` or absent.
    #[default]
    Missing,
}

impl AmountInput {
    /// Returns the amount as a finite `f64`, or why it is not one.
    ///
    /// Text is trimmed first. Empty text is not a number.
    pub fn to_finite(&self) -> Result<f64, AmountError> {
        let value = match self {
            AmountInput::Missing => return Err(AmountError::Missing),
            AmountInput::Number(n) => *n,
            AmountInput::Text(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(AmountError::NotNumeric { raw: raw.clone() });
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| AmountError::NotNumeric { raw: raw.clone() })?
            }
        };

        if !value.is_finite() {
            return Err(AmountError::NotFinite);
        }

        Ok(value)
    }

    /// Returns the amount as an exact decimal.
    ///
    /// Conversion goes through the shortest decimal text of the `f64`, so
    /// `12.345` becomes exactly `12.345` rather than its binary neighbour.
    pub fn to_decimal(&self) -> Result<Decimal, AmountError> {
        let value = self.to_finite()?;
        Decimal::from_str(&value.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(value))
            .ok_or(AmountError::TooLarge { value })
    }
}

impl From<f64> for AmountInput {
    fn from(value: f64) -> Self {
        AmountInput::Number(value)
    }
}

impl From<f32> for AmountInput {
    fn from(value: f32) -> Self {
        AmountInput::Number(value as f64)
    }
}

impl From<i32> for AmountInput {
    fn from(value: i32) -> Self {
        AmountInput::Number(value as f64)
    }
}

impl From<i64> for AmountInput {
    fn from(value: i64) -> Self {
        AmountInput::Number(value as f64)
    }
}

impl From<u32> for AmountInput {
    fn from(value: u32) -> Self {
        AmountInput::Number(value as f64)
    }
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        AmountInput::Text(value.to_string())
    }
}

impl From<String> for AmountInput {
    fn from(value: String) -> Self {
        AmountInput::Text(value)
    }
}

impl From<&AmountInput> for AmountInput {
    fn from(value: &AmountInput) -> Self {
        value.clone()
    }
}

impl<T> From<Option<T>> for AmountInput
where
    T: Into<AmountInput>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AmountInput::Missing)
    }
}
