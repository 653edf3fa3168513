//! # Sales Ledger
//!
//! The append-only history of completed sales.
//!
//! Records are stored in insertion order, which is also chronological
//! order; nothing ever edits or removes a record. Like the inventory,
//! the ledger lives in memory and is rewritten to its backing file in
//! full after every append.

use serde::{Deserialize, Serialize};

use crate::types::SaleRecord;

/// The append-only sales ledger.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesLedger {
    records: Vec<SaleRecord>,
}

impl SalesLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        SalesLedger::default()
    }

    /// Builds a ledger from already-loaded records, preserving order.
    /// Used by the store layer when reading the data file.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        SalesLedger { records }
    }

    /// Appends a completed sale. The only mutation the ledger supports.
    pub fn append(&mut self, record: SaleRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Number of recorded transactions.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no sale has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineItem;
    use rust_decimal_macros::dec;

    #[test]
    fn test_append_preserves_order() {
        let mut ledger = SalesLedger::new();
        assert!(ledger.is_empty());

        ledger.append(SaleRecord::new(vec![LineItem::new(
            "Widget",
            1,
            crate::Money::new(dec!(5.00)),
        )]));
        ledger.append(SaleRecord::new(vec![LineItem::new(
            "Gadget",
            2,
            crate::Money::new(dec!(3.00)),
        )]));

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.records()[0].items()[0].name, "Widget");
        assert_eq!(ledger.records()[1].items()[0].name, "Gadget");
    }
}
