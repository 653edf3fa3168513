//! # Sale Command
//!
//! `register-sale`: the interactive multi-item sale transaction.
//!
//! ## Abort Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  Any of these abandons the WHOLE transaction, with no partial       │
//! │  commit and no partial persistence:                                 │
//! │                                                                     │
//! │  - blank input at any prompt (name, quantity, another-item)         │
//! │  - a product name not in the inventory                              │
//! │  - a quantity exceeding the stock the draft can still see           │
//! │                                                                     │
//! │  The draft holds a private working copy of the inventory, so an     │
//! │  abort is a plain early return: the live store and the ledger       │
//! │  were never touched.                                                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use chrono::Utc;
use tracing::info;

use shopkeep_core::validation::{validate_quantity, validate_yes_no};
use shopkeep_core::{CoreError, Inventory, SaleDraft, SalesLedger};
use shopkeep_store::Store;

use crate::output::Output;
use crate::prompt::{self, Answer};

/// Interactive `register-sale` flow.
pub fn register(
    inventory: &mut Inventory,
    ledger: &mut SalesLedger,
    store: &Store,
    out: &Output,
) -> Result<()> {
    let mut draft = SaleDraft::new(inventory);

    loop {
        let name = match prompt::line("Product name")? {
            Answer::Cancelled => return Ok(()),
            Answer::Value(name) => name,
        };

        // Unknown names abort here, before any quantity is asked for
        if draft.available(&name).is_none() {
            out.error(&CoreError::ProductNotFound(name).to_string());
            return Ok(());
        }

        let quantity = match prompt::until_valid("Quantity", out, validate_quantity)? {
            Answer::Cancelled => return Ok(()),
            Answer::Value(quantity) => quantity,
        };

        match draft.add_item(&name, quantity) {
            Ok(_) => {}
            Err(err @ (CoreError::ProductNotFound(_) | CoreError::InsufficientStock { .. })) => {
                // Domain error: notify and abandon the whole transaction
                out.error(&err.to_string());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        match prompt::until_valid("Add another item? (yes/no)", out, validate_yes_no)? {
            Answer::Cancelled => return Ok(()),
            Answer::Value(true) => continue,
            Answer::Value(false) => break,
        }
    }

    // Commit: swap in the updated inventory, then persist everything
    // before reporting. At least one line item was accepted to get here.
    let opened_at = draft.opened_at();
    let (updated, record) = draft.commit()?;
    *inventory = updated;
    store.inventory().save(inventory)?;

    let receipt = record.clone();
    ledger.append(record);
    store.sales().save(ledger)?;

    info!(
        items = receipt.len(),
        total = %receipt.total(),
        ring_up_ms = (Utc::now() - opened_at).num_milliseconds(),
        "Sale recorded"
    );

    out.success("SALE RECORDED");
    for item in receipt.items() {
        out.info(&format!(
            "- {} x {}: {}",
            item.quantity, item.name, item.unit_price
        ));
    }
    out.info(&format!("Total: {}", receipt.total()));

    Ok(())
}
