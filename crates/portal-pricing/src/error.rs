//! # Error Types
//!
//! Error types for portal-pricing.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  PricingError                                                           │
//! │  ├── AmountError      - Raw amount is missing or not a number          │
//! │  ├── ConfigError      - Monetary config could not be loaded            │
//! │  └── ValidationError  - A config value is outside its bounds           │
//! │                                                                         │
//! │  The four pricing operations never return these. They degrade to       │
//! │  "" / the input price. Errors surface only to callers that ask.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Amount Error
// =============================================================================

/// Why a raw amount could not be turned into a finite number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    /// The amount was null or absent.
    #[error("amount is missing")]
    Missing,

    /// The amount text is not a number.
    #[error("amount '{raw}' is not numeric")]
    NotNumeric { raw: String },

    /// The amount parsed, but to NaN or infinity.
    #[error("amount is not a finite number")]
    NotFinite,

    /// The amount is finite but outside what the decimal engine can hold.
    #[error("amount {value} is too large to format")]
    TooLarge { value: f64 },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting was present but could not be understood.
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    /// A setting parsed but failed validation.
    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    /// The backend payload is not valid JSON for a config.
    #[error("Malformed config payload: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Pricing Error
// =============================================================================

/// Umbrella error for callers that want one type.
#[derive(Debug, Error)]
pub enum PricingError {
    #[error(transparent)]
    Amount(#[from] AmountError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with PricingError.
pub type PricingResult<T> = Result<T, PricingError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_error_messages() {
        let err = AmountError::NotNumeric {
            raw: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "amount 'abc' is not numeric");
        assert_eq!(AmountError::Missing.to_string(), "amount is missing");
    }

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::InvalidValue {
            key: "PORTAL_CURRENCY_POSITION".to_string(),
            value: "middle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PORTAL_CURRENCY_POSITION: 'middle'"
        );
    }

    #[test]
    fn test_validation_converts_to_config_error() {
        let validation_err = ValidationError::OutOfRange {
            field: "decimal_digits".to_string(),
            min: 0,
            max: 28,
        };
        let config_err: ConfigError = validation_err.into();
        assert!(matches!(config_err, ConfigError::Validation(_)));
        assert_eq!(
            config_err.to_string(),
            "Invalid configuration: decimal_digits must be between 0 and 28"
        );
    }

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: PricingError = AmountError::NotFinite.into();
        assert_eq!(err.to_string(), "amount is not a finite number");
    }
}
