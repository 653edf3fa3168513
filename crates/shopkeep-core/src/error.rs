//! # Error Types
//!
//! Domain-specific error types for shopkeep-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  shopkeep-core errors (this file)                                   │
//! │  ├── CoreError        - Domain rule violations                      │
//! │  └── ValidationError  - Raw-input validation failures               │
//! │                                                                     │
//! │  shopkeep-store errors (separate crate)                             │
//! │  └── StoreError       - Data-file read/write/parse failures         │
//! │                                                                     │
//! │  CLI (apps/cli)                                                     │
//! │  └── anyhow::Error    - Only storage failures escalate this far     │
//! │                                                                     │
//! │  ValidationError → re-prompt.  CoreError → abort the operation.     │
//! │  StoreError → propagate and terminate.                              │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, counts)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. The interactive loop
/// catches them and translates them to operator-facing notices; they
/// never terminate the process.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product cannot be found in the inventory.
    ///
    /// ## When This Occurs
    /// - A sale line item names a product that was never added
    /// - The profit calculator meets a ledger entry whose product
    ///   no longer exists (dangling reference)
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// Insufficient stock to complete a sale line item.
    ///
    /// ## When This Occurs
    /// - Requested quantity exceeds the stock the draft sale can still
    ///   see (earlier lines in the same draft already consumed some)
    #[error("insufficient stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// A draft sale was committed without any accepted line item.
    ///
    /// The interactive flow prevents this (blank input abandons the
    /// draft before commit), so hitting it indicates a caller bug.
    #[error("cannot commit a sale with no line items")]
    EmptySale,

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Raw-input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// They are recovered locally by re-prompting and never propagate
/// past the prompt loop.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Quantity input did not parse as a strictly positive integer.
    #[error("quantity must be a positive whole number")]
    InvalidQuantity,

    /// Price input did not parse as a non-negative decimal number.
    #[error("price must be a non-negative number")]
    InvalidPrice,

    /// Answer was neither yes nor no.
    #[error("answer must be 'yes' or 'no'")]
    InvalidAnswer,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            name: "Widget".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for Widget: available 3, requested 5"
        );

        let err = CoreError::ProductNotFound("Gadget".to_string());
        assert_eq!(err.to_string(), "product not found: Gadget");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::InvalidQuantity.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
