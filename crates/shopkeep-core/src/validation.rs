//! # Validation Module
//!
//! Raw-input validation for Shopkeep.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Flow                                │
//! │                                                                     │
//! │  Operator types: "3"                                                │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  prompt loop (apps/cli) passes the raw string here                  │
//! │       │                                                             │
//! │       ├── Ok(value)  → proceed with the operation                   │
//! │       │                                                             │
//! │       └── Err(...)   → show the message, re-prompt                  │
//! │                        (blank input escapes the loop entirely)      │
//! │                                                                     │
//! │  Results, not exceptions: callers branch on the return value.       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All validators are pure: no side effects beyond the error description
//! carried in the result.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a raw quantity string.
///
/// ## Rules
/// - Must parse as an integer
/// - Must be strictly greater than 0
///
/// ## Example
/// ```rust
/// use shopkeep_core::validation::validate_quantity;
///
/// assert_eq!(validate_quantity("3").unwrap(), 3);
/// assert!(validate_quantity("0").is_err());
/// assert!(validate_quantity("-2").is_err());
/// assert!(validate_quantity("3.5").is_err());
/// ```
pub fn validate_quantity(raw: &str) -> ValidationResult<i64> {
    let quantity: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidQuantity)?;

    if quantity <= 0 {
        return Err(ValidationError::InvalidQuantity);
    }

    Ok(quantity)
}

/// Validates a raw price string.
///
/// ## Rules
/// - Must parse as a decimal number
/// - Must be greater than or equal to 0 (zero is allowed: free items)
///
/// ## Example
/// ```rust
/// use shopkeep_core::validation::validate_price;
///
/// assert!(validate_price("2.50").is_ok());
/// assert!(validate_price("0").is_ok());
/// assert!(validate_price("-1").is_err());
/// assert!(validate_price("abc").is_err());
/// ```
pub fn validate_price(raw: &str) -> ValidationResult<Money> {
    let price: Money = raw.parse().map_err(|_| ValidationError::InvalidPrice)?;

    if price.is_negative() {
        return Err(ValidationError::InvalidPrice);
    }

    Ok(price)
}

// =============================================================================
// Answer Validators
// =============================================================================

/// Validates a yes/no answer.
///
/// ## Rules
/// - Case-insensitive
/// - `yes` / `y` → `true`, `no` / `n` → `false`
/// - Anything else is rejected (the prompt loop re-asks)
pub fn validate_yes_no(raw: &str) -> ValidationResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "yes" | "y" => Ok(true),
        "no" | "n" => Ok(false),
        _ => Err(ValidationError::InvalidAnswer),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_validate_quantity() {
        // Valid quantities
        assert_eq!(validate_quantity("1").unwrap(), 1);
        assert_eq!(validate_quantity(" 42 ").unwrap(), 42);

        // Invalid quantities
        assert!(validate_quantity("0").is_err());
        assert!(validate_quantity("-3").is_err());
        assert!(validate_quantity("2.5").is_err());
        assert!(validate_quantity("ten").is_err());
        assert!(validate_quantity("").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price("2.50").unwrap(), Money::new(dec!(2.50)));
        assert_eq!(validate_price("0").unwrap(), Money::zero());
        assert_eq!(validate_price(" 19.99 ").unwrap(), Money::new(dec!(19.99)));

        assert!(validate_price("-0.01").is_err());
        assert!(validate_price("free").is_err());
        assert!(validate_price("").is_err());
    }

    #[test]
    fn test_validate_yes_no() {
        assert_eq!(validate_yes_no("yes").unwrap(), true);
        assert_eq!(validate_yes_no("Y").unwrap(), true);
        assert_eq!(validate_yes_no("No").unwrap(), false);
        assert_eq!(validate_yes_no(" n ").unwrap(), false);

        assert!(validate_yes_no("maybe").is_err());
        assert!(validate_yes_no("").is_err());
    }
}
