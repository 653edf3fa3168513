//! # Sale Transaction
//!
//! Draft sales with atomic commit/abort semantics.
//!
//! ## Working-Copy Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Draft Sale Lifecycle                             │
//! │                                                                     │
//! │  live Inventory ──clone──► SaleDraft { working copy, items }        │
//! │                                 │                                   │
//! │       add_item("Widget", 3) ────┤  checks + decrements the COPY     │
//! │       add_item("Widget", 9) ────┤  sees stock already reduced by 3  │
//! │                                 │                                   │
//! │           ┌─────────────────────┴──────────────────────┐            │
//! │           ▼                                            ▼            │
//! │        commit(self)                              drop(draft)        │
//! │           │                                            │            │
//! │  (updated Inventory, SaleRecord)              live store untouched, │
//! │  caller swaps in the inventory,               nothing to roll back  │
//! │  appends + persists the record                                      │
//! │                                                                     │
//! │  The live inventory is NEVER mutated mid-transaction, so any abort  │
//! │  path - unknown product, insufficient stock, blank input - is a     │
//! │  plain drop with no undo logic.                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};
use crate::inventory::Inventory;
use crate::money::Money;
use crate::types::{LineItem, SaleRecord};

// =============================================================================
// SaleDraft
// =============================================================================

/// An in-progress multi-item sale.
///
/// ## Invariants
/// - The working copy's stock never goes negative
/// - Line items within one draft consume from the same working copy,
///   so a draft can never oversell a product across its own lines
/// - Until [`SaleDraft::commit`] returns, nothing outside the draft
///   has changed
#[derive(Debug, Clone)]
pub struct SaleDraft {
    /// Private working copy of the inventory at transaction start.
    working: Inventory,

    /// Accepted line items, in ring-up order.
    items: Vec<LineItem>,

    /// When the draft was opened. In-memory only, never persisted.
    opened_at: DateTime<Utc>,
}

impl SaleDraft {
    /// Opens a draft against a snapshot of the given inventory.
    pub fn new(inventory: &Inventory) -> Self {
        SaleDraft {
            working: inventory.clone(),
            items: Vec::new(),
            opened_at: Utc::now(),
        }
    }

    /// Attempts to add a line item to the draft.
    ///
    /// On success the item is recorded with the product's CURRENT sale
    /// price (frozen into the line item) and the working copy's stock is
    /// reduced immediately, so later lines see the remaining quantity.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] - the name is not in the inventory
    /// - [`CoreError::InsufficientStock`] - the request exceeds what the
    ///   draft can still see
    ///
    /// An error leaves the draft unchanged; the interactive flow treats
    /// both cases as an abort of the whole transaction.
    pub fn add_item(&mut self, name: &str, quantity: i64) -> CoreResult<&LineItem> {
        let product = self
            .working
            .get(name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        if quantity > product.quantity {
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available: product.quantity,
                requested: quantity,
            });
        }

        let unit_price = product.sale_price;

        // Cannot fail: availability was checked against the same copy
        self.working.decrement(name, quantity)?;

        self.items.push(LineItem::new(name, quantity, unit_price));
        Ok(self.items.last().expect("line item just pushed"))
    }

    /// Stock the draft can still see for `name`: the working copy's
    /// quantity, i.e. on-hand stock minus what earlier lines in this
    /// draft already consumed. `None` for a product not in the
    /// inventory.
    ///
    /// Lets the interactive flow reject an unknown name right after
    /// the name prompt, before asking for a quantity.
    pub fn available(&self, name: &str) -> Option<i64> {
        self.working.get(name).map(|p| p.quantity)
    }

    /// Accepted line items so far, in ring-up order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// True until the first line item is accepted.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total charged across all accepted line items.
    pub fn total(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// When the draft was opened.
    pub fn opened_at(&self) -> DateTime<Utc> {
        self.opened_at
    }

    /// Completes the transaction.
    ///
    /// Consumes the draft and yields the updated inventory (the working
    /// copy, with all decrements applied) plus the immutable sale
    /// record. The caller swaps the inventory into place, appends the
    /// record to the ledger, and persists both - in that order.
    ///
    /// ## Errors
    /// [`CoreError::EmptySale`] if no line item was ever accepted. The
    /// interactive flow abandons empty drafts before reaching commit.
    pub fn commit(self) -> CoreResult<(Inventory, SaleRecord)> {
        if self.items.is_empty() {
            return Err(CoreError::EmptySale);
        }

        Ok((self.working, SaleRecord::new(self.items)))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn widget_inventory() -> Inventory {
        let mut inv = Inventory::new();
        inv.add_or_increment(
            "Widget",
            10,
            Money::new(dec!(2.00)),
            Money::new(dec!(5.00)),
        );
        inv
    }

    #[test]
    fn test_widget_scenario() {
        // Add Widget qty=10 cost=2.00 price=5.00, sell 3, decline another
        let inv = widget_inventory();
        let mut draft = SaleDraft::new(&inv);

        let line = draft.add_item("Widget", 3).unwrap();
        assert_eq!(line.unit_price, Money::new(dec!(5.00)));
        assert_eq!(draft.total(), Money::new(dec!(15.00)));

        let (updated, record) = draft.commit().unwrap();
        assert_eq!(updated.get("Widget").unwrap().quantity, 7);
        assert_eq!(record.items().len(), 1);
        assert_eq!(record.total(), Money::new(dec!(15.00)));

        // The original inventory snapshot was never touched
        assert_eq!(inv.get("Widget").unwrap().quantity, 10);
    }

    #[test]
    fn test_oversell_is_rejected_and_harmless() {
        let inv = widget_inventory();
        let mut draft = SaleDraft::new(&inv);

        let err = draft.add_item("Widget", 999).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 10,
                requested: 999,
                ..
            }
        ));

        // Nothing was recorded, nothing was decremented anywhere
        assert!(draft.is_empty());
        assert_eq!(inv.get("Widget").unwrap().quantity, 10);
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let inv = widget_inventory();
        let mut draft = SaleDraft::new(&inv);

        assert!(matches!(
            draft.add_item("Ghost", 1).unwrap_err(),
            CoreError::ProductNotFound(_)
        ));
    }

    #[test]
    fn test_available_tracks_the_working_copy() {
        let inv = widget_inventory();
        let mut draft = SaleDraft::new(&inv);

        // Unknown names are visible as unknown BEFORE any quantity is
        // requested; known names report their remaining stock
        assert_eq!(draft.available("Ghost"), None);
        assert_eq!(draft.available("Widget"), Some(10));

        draft.add_item("Widget", 6).unwrap();
        assert_eq!(draft.available("Widget"), Some(4));

        // The live inventory is unaffected by the draft's view
        assert_eq!(inv.get("Widget").unwrap().quantity, 10);
    }

    #[test]
    fn test_later_lines_see_reduced_stock() {
        // 10 on hand: a 6-line then an 8-line must not both fit
        let inv = widget_inventory();
        let mut draft = SaleDraft::new(&inv);

        draft.add_item("Widget", 6).unwrap();
        let err = draft.add_item("Widget", 8).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 4,
                requested: 8,
                ..
            }
        ));

        // The accepted line survives; a fitting follow-up still works
        draft.add_item("Widget", 4).unwrap();
        let (updated, record) = draft.commit().unwrap();
        assert_eq!(updated.get("Widget").unwrap().quantity, 0);
        assert_eq!(record.items().len(), 2);
    }

    #[test]
    fn test_abort_by_drop_changes_nothing() {
        let inv = widget_inventory();
        {
            let mut draft = SaleDraft::new(&inv);
            draft.add_item("Widget", 9).unwrap();
            // Draft dropped here: operator gave blank input mid-transaction
        }
        assert_eq!(inv.get("Widget").unwrap().quantity, 10);
    }

    #[test]
    fn test_commit_requires_line_items() {
        let inv = widget_inventory();
        let draft = SaleDraft::new(&inv);
        assert!(matches!(draft.commit().unwrap_err(), CoreError::EmptySale));
    }

    #[test]
    fn test_multi_product_draft_keeps_ring_up_order() {
        let mut inv = widget_inventory();
        inv.add_or_increment("Gadget", 2, Money::new(dec!(1.00)), Money::new(dec!(3.50)));

        let mut draft = SaleDraft::new(&inv);
        draft.add_item("Gadget", 1).unwrap();
        draft.add_item("Widget", 2).unwrap();

        let (updated, record) = draft.commit().unwrap();
        let names: Vec<_> = record.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Gadget", "Widget"]);
        assert_eq!(record.total(), Money::new(dec!(13.50)));
        assert_eq!(updated.get("Gadget").unwrap().quantity, 1);
        assert_eq!(updated.get("Widget").unwrap().quantity, 8);
    }
}
