//! # Inventory Store
//!
//! The in-memory inventory store and its mutation rules.
//!
//! ## Store Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Mutations                             │
//! │                                                                     │
//! │  add_or_increment("Widget", 10, €2.00, €5.00)                       │
//! │       │                                                             │
//! │       ├── new name  → Product created with the given prices         │
//! │       │                                                             │
//! │       └── known name → quantity += 10                               │
//! │                        supplied prices IGNORED (first add wins)     │
//! │                                                                     │
//! │  decrement("Widget", 3)                                             │
//! │       │                                                             │
//! │       ├── enough stock → quantity -= 3                              │
//! │       │                                                             │
//! │       └── not enough   → InsufficientStock, quantity untouched      │
//! │                          (stock can NEVER go negative)              │
//! │                                                                     │
//! │  Products are never deleted. Persistence is the caller's duty and   │
//! │  follows every mutation with a whole-file rewrite.                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Vec, not a HashMap?
//! Listing and persistence must preserve insertion order, and the store
//! holds a handful of products for a single operator. A vector with
//! linear name lookup keeps iteration order for free.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;

// =============================================================================
// Add Outcome
// =============================================================================

/// What an `add_or_increment` call actually did.
///
/// The interactive flow cares about the difference: a brand-new product
/// was prompted for prices, a restock was not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new product was created.
    Created,

    /// An existing product's stock was increased; the supplied prices
    /// were discarded in favor of the ones from the first add.
    Restocked { new_quantity: i64 },
}

// =============================================================================
// Stock Listing
// =============================================================================

/// One row of the `list-products` view: name, stock on hand, and the
/// price charged to customers. Purchase prices are deliberately absent
/// from the listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockListing {
    pub name: String,
    pub quantity: i64,
    pub sale_price: Money,
}

// =============================================================================
// Inventory
// =============================================================================

/// The in-memory inventory store: an insertion-ordered collection of
/// [`Product`]s keyed by name.
///
/// ## Invariants
/// - `quantity >= 0` for every product, at all times
/// - Names are unique (case-sensitive)
/// - Iteration order is insertion order, which is also persistence order
///
/// The store is `Clone` so a draft sale can work on a private copy and
/// leave the live store untouched until commit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    products: Vec<Product>,
}

impl Inventory {
    /// Creates an empty inventory.
    pub fn new() -> Self {
        Inventory::default()
    }

    /// Builds an inventory from already-loaded products, preserving
    /// their order. Used by the store layer when reading the data file.
    pub fn from_products(products: Vec<Product>) -> Self {
        Inventory { products }
    }

    /// Looks up a product by exact name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// All products in insertion order, including zero-quantity ones.
    ///
    /// This is the persistence view: sold-out products stay on file so
    /// their prices survive restocking.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of distinct products (including sold-out ones).
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when no product was ever added.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Adds stock for `name`, creating the product on first sight.
    ///
    /// ## Behavior
    /// - Known name: `quantity` accumulates; `purchase_price` and
    ///   `sale_price` arguments are ignored - the prices recorded by the
    ///   first add are authoritative and never updated
    /// - New name: a product is created with the given quantity and prices
    ///
    /// `quantity` must already be validated positive and the prices
    /// non-negative (see [`crate::validation`]).
    pub fn add_or_increment(
        &mut self,
        name: &str,
        quantity: i64,
        purchase_price: Money,
        sale_price: Money,
    ) -> AddOutcome {
        if let Ok(new_quantity) = self.restock(name, quantity) {
            return AddOutcome::Restocked { new_quantity };
        }

        self.products
            .push(Product::new(name, quantity, purchase_price, sale_price));
        AddOutcome::Created
    }

    /// Adds stock to an EXISTING product, returning the new quantity.
    ///
    /// Prices are not part of the signature at all: a restock can never
    /// touch them, which is the "first add wins" rule made explicit.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] for an unknown name - use
    /// [`Inventory::add_or_increment`] when the product may not exist
    /// yet.
    pub fn restock(&mut self, name: &str, quantity: i64) -> CoreResult<i64> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        product.quantity += quantity;
        Ok(product.quantity)
    }

    /// Reduces stock for `name` by `quantity`.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] for an unknown name
    /// - [`CoreError::InsufficientStock`] when the request exceeds the
    ///   stock on hand; the quantity is left untouched
    ///
    /// Callers are expected to have checked availability already; the
    /// check here is what makes `quantity >= 0` unconditional.
    pub fn decrement(&mut self, name: &str, quantity: i64) -> CoreResult<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))?;

        if quantity > product.quantity {
            return Err(CoreError::InsufficientStock {
                name: name.to_string(),
                available: product.quantity,
                requested: quantity,
            });
        }

        product.quantity -= quantity;
        Ok(())
    }

    /// Produces the operator-facing stock listing.
    ///
    /// ## Rules
    /// - Only products with `quantity > 0` appear
    /// - Insertion order is preserved
    /// - Read-only: no side effects
    pub fn list(&self) -> Vec<StockListing> {
        self.products
            .iter()
            .filter(|p| p.quantity > 0)
            .map(|p| StockListing {
                name: p.name.clone(),
                quantity: p.quantity,
                sale_price: p.sale_price,
            })
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn money(raw: &str) -> Money {
        raw.parse().unwrap()
    }

    #[test]
    fn test_add_creates_then_accumulates() {
        let mut inv = Inventory::new();

        let outcome = inv.add_or_increment("Widget", 10, money("2.00"), money("5.00"));
        assert_eq!(outcome, AddOutcome::Created);

        let outcome = inv.add_or_increment("Widget", 5, money("9.99"), money("9.99"));
        assert_eq!(outcome, AddOutcome::Restocked { new_quantity: 15 });

        let widget = inv.get("Widget").unwrap();
        assert_eq!(widget.quantity, 15);
        // First add's prices are authoritative; the restock's were discarded
        assert_eq!(widget.purchase_price, money("2.00"));
        assert_eq!(widget.sale_price, money("5.00"));
    }

    #[test]
    fn test_restock_never_touches_prices() {
        let mut inv = Inventory::new();
        inv.add_or_increment("Widget", 10, money("2.00"), money("5.00"));

        assert_eq!(inv.restock("Widget", 5).unwrap(), 15);

        let widget = inv.get("Widget").unwrap();
        assert_eq!(widget.quantity, 15);
        assert_eq!(widget.purchase_price, money("2.00"));
        assert_eq!(widget.sale_price, money("5.00"));

        // Restocking cannot create products
        assert!(matches!(
            inv.restock("Ghost", 1).unwrap_err(),
            CoreError::ProductNotFound(_)
        ));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut inv = Inventory::new();
        inv.add_or_increment("Widget", 1, money("1"), money("2"));
        inv.add_or_increment("widget", 3, money("1"), money("2"));

        assert_eq!(inv.len(), 2);
        assert_eq!(inv.get("Widget").unwrap().quantity, 1);
        assert_eq!(inv.get("widget").unwrap().quantity, 3);
    }

    #[test]
    fn test_list_hides_sold_out_products() {
        let mut inv = Inventory::new();
        inv.add_or_increment("Widget", 2, money("2.00"), money("5.00"));
        inv.add_or_increment("Gadget", 1, money("1.00"), money("3.00"));
        inv.decrement("Gadget", 1).unwrap();

        let listing = inv.list();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].name, "Widget");
        assert_eq!(listing[0].quantity, 2);
        assert_eq!(listing[0].sale_price, money("5.00"));

        // The sold-out product is hidden from the listing but still stored
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.get("Gadget").unwrap().quantity, 0);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut inv = Inventory::new();
        for name in ["Zebra", "Apple", "Mango"] {
            inv.add_or_increment(name, 1, money("1"), money("2"));
        }

        let names: Vec<_> = inv.list().into_iter().map(|l| l.name).collect();
        assert_eq!(names, ["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_decrement_guards_stock() {
        let mut inv = Inventory::new();
        inv.add_or_increment("Widget", 7, money("2.00"), money("5.00"));

        // Overselling fails and leaves the quantity untouched
        let err = inv.decrement("Widget", 999).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InsufficientStock {
                available: 7,
                requested: 999,
                ..
            }
        ));
        assert_eq!(inv.get("Widget").unwrap().quantity, 7);

        // Selling exactly the stock on hand is allowed
        inv.decrement("Widget", 7).unwrap();
        assert_eq!(inv.get("Widget").unwrap().quantity, 0);

        // Unknown names are reported as such
        assert!(matches!(
            inv.decrement("Ghost", 1).unwrap_err(),
            CoreError::ProductNotFound(_)
        ));
    }
}
