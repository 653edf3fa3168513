//! # Inventory Repository
//!
//! File operations for the product inventory.
//!
//! ## Line Format
//! ```text
//! name,quantity,purchase_price,sale_price
//!
//! Widget,10,2.00,5.00
//! Gadget,0,1.50,3.99        ← zero-quantity products ARE persisted
//! ```
//!
//! Quantity is an integer literal, prices are decimal literals. No
//! header, no escaping: a product name containing a comma corrupts the
//! record on reload, which surfaces as a `Malformed` error.

use std::path::{Path, PathBuf};

use tracing::debug;

use shopkeep_core::{Inventory, Money, Product};

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_or_empty, rewrite};

/// Number of comma-separated fields in a product record.
const PRODUCT_FIELDS: usize = 4;

/// Repository for the inventory backing file.
///
/// ## Usage
/// ```rust,ignore
/// let file = InventoryFile::new("products.txt");
/// let mut inventory = file.load()?;
/// inventory.add_or_increment("Widget", 10, purchase, sale);
/// file.save(&inventory)?; // whole-file rewrite, immediately
/// ```
#[derive(Debug, Clone)]
pub struct InventoryFile {
    path: PathBuf,
}

impl InventoryFile {
    /// Creates a repository over the given file location. No I/O yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        InventoryFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full inventory.
    ///
    /// ## Behavior
    /// - Absent file ⇒ empty inventory (first run)
    /// - Line order becomes insertion order, so a save/load round-trip
    ///   reproduces the identical store
    /// - Any malformed line aborts the load with file and line number
    pub fn load(&self) -> StoreResult<Inventory> {
        let contents = read_or_empty(&self.path)?;

        let mut products = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            products.push(self.parse_line(idx + 1, line)?);
        }

        debug!(path = %self.path.display(), count = products.len(), "Loaded inventory");
        Ok(Inventory::from_products(products))
    }

    /// Rewrites the backing file from the in-memory store.
    ///
    /// Every product is written, including zero-quantity ones: sold-out
    /// products keep their prices on file for future restocks.
    pub fn save(&self, inventory: &Inventory) -> StoreResult<()> {
        let mut contents = String::new();
        for product in inventory.products() {
            contents.push_str(&format!(
                "{},{},{},{}\n",
                product.name,
                product.quantity,
                product.purchase_price.to_literal(),
                product.sale_price.to_literal(),
            ));
        }

        rewrite(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = inventory.len(), "Saved inventory");
        Ok(())
    }

    /// Parses one `name,quantity,purchase,sale` record.
    fn parse_line(&self, line_no: usize, line: &str) -> StoreResult<Product> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != PRODUCT_FIELDS {
            return Err(StoreError::malformed(
                &self.path,
                line_no,
                format!("expected {} fields, found {}", PRODUCT_FIELDS, fields.len()),
            ));
        }

        let quantity: i64 = fields[1].trim().parse().map_err(|_| {
            StoreError::malformed(
                &self.path,
                line_no,
                format!("invalid quantity '{}'", fields[1]),
            )
        })?;

        let purchase_price: Money = fields[2].parse().map_err(|_| {
            StoreError::malformed(
                &self.path,
                line_no,
                format!("invalid purchase price '{}'", fields[2]),
            )
        })?;

        let sale_price: Money = fields[3].parse().map_err(|_| {
            StoreError::malformed(
                &self.path,
                line_no,
                format!("invalid sale price '{}'", fields[3]),
            )
        })?;

        Ok(Product::new(fields[0], quantity, purchase_price, sale_price))
    }
}
