//! # Profit Command
//!
//! `show-profits`: replays the ledger against current purchase prices.

use shopkeep_core::{calculate_profits, Inventory, SalesLedger};

use crate::output::Output;

/// Prints gross and net profit, with one warning per ledger line item
/// whose product is no longer in the inventory (net skips those; gross
/// does not). Read-only: nothing is mutated or persisted.
pub fn show(ledger: &SalesLedger, inventory: &Inventory, out: &Output) {
    let report = calculate_profits(ledger, inventory);

    for name in &report.missing_products {
        out.warn(&format!("product '{name}' not found in inventory"));
    }

    out.info(&format!(
        "Profit: gross={} net={}",
        report.gross, report.net
    ));
}
