//! # Domain Types
//!
//! Core domain types for Shopkeep.
//!
//! ## Type Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Domain Model                                 │
//! │                                                                     │
//! │  Inventory ──owns──► Product { name, quantity, prices }             │
//! │                         ▲                                           │
//! │                         │ referenced by name only                   │
//! │                         │ (no owning relationship)                  │
//! │                                                                     │
//! │  SalesLedger ─owns──► SaleRecord ──owns──► LineItem                 │
//! │                       (immutable)          { name, qty,             │
//! │                                              unit_price }           │
//! │                                                                     │
//! │  A LineItem keeps the sale price AT TRANSACTION TIME.               │
//! │  Later price changes never rewrite history.                         │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A stock-keeping unit.
///
/// ## Identity
/// The `name` is the unique key, case-sensitive, and doubles as the
/// display label. There are no surrogate IDs in this system.
///
/// ## Invariants
/// - `quantity >= 0` at all times (enforced by [`crate::Inventory`])
/// - `purchase_price` and `sale_price` come from the FIRST add for this
///   name; later adds only accumulate quantity and never touch prices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique, case-sensitive product name.
    pub name: String,

    /// Current stock on hand. Never negative.
    pub quantity: i64,

    /// Unit cost paid for the product.
    pub purchase_price: Money,

    /// Unit price charged to customers.
    pub sale_price: Money,
}

impl Product {
    /// Creates a new product with an initial stock level.
    pub fn new(
        name: impl Into<String>,
        quantity: i64,
        purchase_price: Money,
        sale_price: Money,
    ) -> Self {
        Product {
            name: name.into(),
            quantity,
            purchase_price,
            sale_price,
        }
    }

    /// Unit margin at current prices (sale price minus purchase price).
    pub fn unit_margin(&self) -> Money {
        self.sale_price - self.purchase_price
    }
}

// =============================================================================
// LineItem
// =============================================================================

/// One line of a sale: a product name, a quantity, and the unit price
/// charged.
///
/// ## Price Freezing
/// `unit_price` is captured when the line is accepted into the draft
/// sale. If the product's sale price changes afterwards, this line -
/// and the persisted record built from it - retains the original price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product name (reference by name, not ownership).
    pub name: String,

    /// Quantity sold. Always positive.
    pub quantity: i64,

    /// Sale price per unit at transaction time.
    pub unit_price: Money,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(name: impl Into<String>, quantity: i64, unit_price: Money) -> Self {
        LineItem {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

// =============================================================================
// SaleRecord
// =============================================================================

/// One completed multi-item sale transaction.
///
/// ## Immutability
/// A record is created exactly once, by [`crate::SaleDraft::commit`],
/// and never changes afterwards. The ledger stores records in
/// chronological (insertion) order.
///
/// ## Persistence Shape
/// On disk a record is a flattened `(name, quantity, price)*` sequence.
/// That flattening happens in the store layer, never here; in memory the
/// record is always a typed line-item list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    items: Vec<LineItem>,
}

impl SaleRecord {
    /// Builds a record from its line items.
    pub fn new(items: Vec<LineItem>) -> Self {
        SaleRecord { items }
    }

    /// The line items of this transaction, in the order they were rung up.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total charged for the whole transaction.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the record holds no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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
    fn test_line_total() {
        let line = LineItem::new("Widget", 3, Money::new(dec!(5.00)));
        assert_eq!(line.line_total(), Money::new(dec!(15.00)));
    }

    #[test]
    fn test_record_total_spans_items() {
        let record = SaleRecord::new(vec![
            LineItem::new("Widget", 3, Money::new(dec!(5.00))),
            LineItem::new("Gadget", 1, Money::new(dec!(2.50))),
        ]);
        assert_eq!(record.len(), 2);
        assert_eq!(record.total(), Money::new(dec!(17.50)));
    }

    #[test]
    fn test_unit_margin() {
        let product = Product::new("Widget", 10, Money::new(dec!(2.00)), Money::new(dec!(5.00)));
        assert_eq!(product.unit_margin(), Money::new(dec!(3.00)));
    }
}
