//! # shopkeep-core: Pure Business Logic for Shopkeep
//!
//! This crate is the **heart** of Shopkeep. It contains all business logic
//! as pure functions and plain data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Shopkeep Architecture                          │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                    apps/cli (REPL)                            │  │
//! │  │   add-product ─ list-products ─ register-sale ─ show-profits  │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              ★ shopkeep-core (THIS CRATE) ★                   │  │
//! │  │                                                               │  │
//! │  │  ┌─────────┐ ┌───────────┐ ┌───────────┐ ┌────────┐          │  │
//! │  │  │  money  │ │ inventory │ │   sale    │ │ profit │          │  │
//! │  │  │  Money  │ │ Inventory │ │ SaleDraft │ │ gross/ │          │  │
//! │  │  │         │ │  Product  │ │ LineItem  │ │  net   │          │  │
//! │  │  └─────────┘ └───────────┘ └───────────┘ └────────┘          │  │
//! │  │                                                               │  │
//! │  │  NO I/O • NO FILES • NO PROMPTS • PURE FUNCTIONS             │  │
//! │  └─────────────────────────────┬─────────────────────────────────┘  │
//! │                                │                                    │
//! │  ┌─────────────────────────────▼─────────────────────────────────┐  │
//! │  │              shopkeep-store (Persistence Layer)               │  │
//! │  │        products.txt and sales.txt, rewritten on mutation      │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, LineItem, SaleRecord)
//! - [`money`] - Money type with exact decimal arithmetic (no raw floats!)
//! - [`error`] - Domain error types
//! - [`validation`] - Raw-input validation rules
//! - [`inventory`] - The in-memory inventory store and its mutation rules
//! - [`ledger`] - The append-only sales ledger
//! - [`sale`] - Draft sale transactions with atomic commit/abort
//! - [`profit`] - Gross/net profit derivation from the ledger
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File and terminal access is FORBIDDEN here
//! 3. **Decimal Money**: All monetary values are `rust_decimal` values, never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod inventory;
pub mod ledger;
pub mod money;
pub mod profit;
pub mod sale;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use shopkeep_core::Money` instead of
// `use shopkeep_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use inventory::{AddOutcome, Inventory, StockListing};
pub use ledger::SalesLedger;
pub use money::Money;
pub use profit::{calculate_profits, ProfitReport};
pub use sale::SaleDraft;
pub use types::{LineItem, Product, SaleRecord};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency symbol used everywhere a monetary value is displayed.
///
/// ## Why a constant?
/// The tracker is deliberately single-currency. Centralizing the symbol
/// keeps receipts, listings, and profit reports consistent without
/// dragging in a locale abstraction.
pub const CURRENCY_SYMBOL: &str = "€";
