//! # Product Commands
//!
//! `add-product` and `list-products`.

use anyhow::Result;
use tracing::info;

use shopkeep_core::validation::{validate_price, validate_quantity};
use shopkeep_core::Inventory;
use shopkeep_store::Store;

use crate::output::Output;
use crate::prompt::{self, Answer};

/// Interactive `add-product` flow.
///
/// ## Flow
/// 1. Prompt for the product name (blank cancels)
/// 2. Prompt for the quantity until valid (blank cancels)
/// 3. Known product: stock accumulates, prices are NOT asked for and
///    NOT changed - the first add's prices are authoritative
/// 4. New product: prompt for purchase and sale price until valid
/// 5. Persist the inventory immediately (whole-file rewrite)
pub fn add(inventory: &mut Inventory, store: &Store, out: &Output) -> Result<()> {
    let name = match prompt::line("Product name")? {
        Answer::Cancelled => return Ok(()),
        Answer::Value(name) => name,
    };

    let quantity = match prompt::until_valid("Quantity", out, validate_quantity)? {
        Answer::Cancelled => return Ok(()),
        Answer::Value(quantity) => quantity,
    };

    if inventory.get(&name).is_some() {
        // Existing product: prices are never prompted for and never
        // touched - restocking only moves quantity
        let new_quantity = inventory.restock(&name, quantity)?;
        info!(product = %name, quantity, new_quantity, "Product restocked");
    } else {
        let purchase = match prompt::until_valid("Purchase price", out, validate_price)? {
            Answer::Cancelled => return Ok(()),
            Answer::Value(price) => price,
        };
        let sale = match prompt::until_valid("Sale price", out, validate_price)? {
            Answer::Cancelled => return Ok(()),
            Answer::Value(price) => price,
        };
        inventory.add_or_increment(&name, quantity, purchase, sale);
        info!(product = %name, quantity, "Product created");
    }

    store.inventory().save(inventory)?;
    out.success(&format!("ADDED: {quantity} x {name}"));

    Ok(())
}

/// `list-products`: renders the in-stock products as a table.
///
/// Sold-out products are hidden (they stay on file, but an empty shelf
/// is not worth a row).
pub fn list(inventory: &Inventory, out: &Output) {
    out.stock_table(&inventory.list());
}
