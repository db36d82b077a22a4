//! # Validation Module
//!
//! Bounds checks for configuration values coming from the backend or the
//! environment.

use crate::error::ValidationError;
use crate::MAX_DECIMAL_DIGITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the number of fractional digits used for display.
///
/// ## Rules
/// - Must be between 0 and [`MAX_DECIMAL_DIGITS`] (28)
///
/// ## Example
/// ```rust
/// use portal_pricing::validation::validate_decimal_digits;
///
/// assert!(validate_decimal_digits(2).is_ok());
/// assert!(validate_decimal_digits(0).is_ok());
/// assert!(validate_decimal_digits(40).is_err());
/// ```
pub fn validate_decimal_digits(digits: u32) -> ValidationResult<()> {
    if digits > MAX_DECIMAL_DIGITS {
        return Err(ValidationError::OutOfRange {
            field: "decimal_digits".to_string(),
            min: 0,
            max: MAX_DECIMAL_DIGITS as i64,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_decimal_digits() {
        assert!(validate_decimal_digits(0).is_ok());
        assert!(validate_decimal_digits(3).is_ok());
        assert!(validate_decimal_digits(28).is_ok());

        assert!(validate_decimal_digits(29).is_err());
        assert!(validate_decimal_digits(u32::MAX).is_err());
    }
}
