//! # Profit Calculator
//!
//! Derives aggregate profit figures by replaying the sales ledger
//! against the CURRENT inventory purchase prices.
//!
//! ## Two Figures
//! - **Gross profit**: total revenue collected across all sales,
//!   `Σ quantity × unit_price` over every line item - including items
//!   whose product has since vanished from the inventory.
//! - **Net profit**: revenue minus unit purchase cost, counted only for
//!   line items whose product still exists (the cost basis for a
//!   vanished product is unknowable). Net can go negative when purchase
//!   prices rose after the sale.
//!
//! A line item naming an unknown product is surfaced as a warning per
//! occurrence and the calculation continues: partial-failure tolerant,
//! never fatal.

use crate::inventory::Inventory;
use crate::ledger::SalesLedger;
use crate::money::Money;

// =============================================================================
// Profit Report
// =============================================================================

/// The outcome of a profit calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitReport {
    /// Total revenue across all recorded sales.
    pub gross: Money,

    /// Revenue minus purchase cost, for products still in the inventory.
    pub net: Money,

    /// One entry per line item whose product is missing from the
    /// inventory (duplicates preserved - a name missing twice warns
    /// twice). Empty in the common case.
    pub missing_products: Vec<String>,
}

impl ProfitReport {
    /// True when every ledger line item resolved against the inventory.
    pub fn is_complete(&self) -> bool {
        self.missing_products.is_empty()
    }
}

// =============================================================================
// Calculation
// =============================================================================

/// Replays the full ledger against current purchase prices.
///
/// Pure and idempotent: running it twice on unchanged inputs yields an
/// identical report. No side effects beyond the warnings carried in the
/// report itself.
pub fn calculate_profits(ledger: &SalesLedger, inventory: &Inventory) -> ProfitReport {
    let mut gross = Money::zero();
    let mut net = Money::zero();
    let mut missing_products = Vec::new();

    for record in ledger.records() {
        for item in record.items() {
            // Gross counts every line item, dangling or not
            gross += item.line_total();

            match inventory.get(&item.name) {
                Some(product) => {
                    net += (item.unit_price - product.purchase_price) * item.quantity;
                }
                None => {
                    // Dangling reference: report it, skip its net share
                    missing_products.push(item.name.clone());
                }
            }
        }
    }

    ProfitReport {
        gross,
        net,
        missing_products,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LineItem, SaleRecord};
    use rust_decimal_macros::dec;

    fn money(raw: &str) -> Money {
        raw.parse().unwrap()
    }

    fn widget_setup() -> (SalesLedger, Inventory) {
        let mut inventory = Inventory::new();
        inventory.add_or_increment("Widget", 7, money("2.00"), money("5.00"));

        let mut ledger = SalesLedger::new();
        ledger.append(SaleRecord::new(vec![LineItem::new(
            "Widget",
            3,
            money("5.00"),
        )]));

        (ledger, inventory)
    }

    #[test]
    fn test_widget_scenario() {
        // Sold 3 Widgets at €5.00 with cost €2.00: gross 15.00, net 9.00
        let (ledger, inventory) = widget_setup();
        let report = calculate_profits(&ledger, &inventory);

        assert_eq!(report.gross, Money::new(dec!(15.00)));
        assert_eq!(report.net, Money::new(dec!(9.00)));
        assert!(report.is_complete());
    }

    #[test]
    fn test_empty_ledger_yields_zero() {
        let report = calculate_profits(&SalesLedger::new(), &Inventory::new());
        assert_eq!(report.gross, Money::zero());
        assert_eq!(report.net, Money::zero());
        assert!(report.is_complete());
    }

    #[test]
    fn test_dangling_product_counts_gross_only() {
        let mut ledger = SalesLedger::new();
        ledger.append(SaleRecord::new(vec![
            LineItem::new("Ghost", 2, money("4.00")),
            LineItem::new("Ghost", 1, money("4.00")),
        ]));

        let report = calculate_profits(&ledger, &Inventory::new());

        // Revenue was collected regardless of the missing cost basis
        assert_eq!(report.gross, Money::new(dec!(12.00)));
        assert_eq!(report.net, Money::zero());
        // One warning PER occurrence
        assert_eq!(report.missing_products, ["Ghost", "Ghost"]);
    }

    #[test]
    fn test_net_uses_current_purchase_price() {
        // Sold at €5.00 when cost was €2.00; cost has since risen to €6.00
        let mut inventory = Inventory::new();
        inventory.add_or_increment("Widget", 1, money("6.00"), money("5.00"));

        let mut ledger = SalesLedger::new();
        ledger.append(SaleRecord::new(vec![LineItem::new(
            "Widget",
            2,
            money("5.00"),
        )]));

        let report = calculate_profits(&ledger, &inventory);
        assert_eq!(report.gross, Money::new(dec!(10.00)));
        // Net replays against the CURRENT cost and goes negative
        assert_eq!(report.net, Money::new(dec!(-2.00)));
    }

    #[test]
    fn test_idempotent() {
        let (ledger, inventory) = widget_setup();
        let first = calculate_profits(&ledger, &inventory);
        let second = calculate_profits(&ledger, &inventory);
        assert_eq!(first, second);
    }
}
