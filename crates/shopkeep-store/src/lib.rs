//! # shopkeep-store: Persistence Layer for Shopkeep
//!
//! This crate provides file access for the Shopkeep system. The entire
//! data store is two flat, comma-delimited text files.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Shopkeep Data Flow                            │
//! │                                                                     │
//! │  CLI command (add-product, register-sale, ...)                      │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐  │
//! │  │                  shopkeep-store (THIS CRATE)                  │  │
//! │  │                                                               │  │
//! │  │   ┌──────────────┐   ┌────────────────┐   ┌───────────────┐  │  │
//! │  │   │    Store     │   │  Repositories  │   │  Line Format  │  │  │
//! │  │   │  (facade)    │◄──│ InventoryFile  │   │  CSV-ish, no  │  │  │
//! │  │   │              │   │ SalesFile      │   │  escaping     │  │  │
//! │  │   └──────────────┘   └────────────────┘   └───────────────┘  │  │
//! │  └───────────────────────────────────────────────────────────────┘  │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  products.txt / sales.txt (whole-file rewrite on every mutation)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (inventory, sales)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shopkeep_store::Store;
//!
//! let store = Store::open("products.txt", "sales.txt");
//!
//! // Load both stores (absent files load as empty)
//! let mut inventory = store.inventory().load()?;
//! let mut ledger = store.sales().load()?;
//!
//! // ... mutate in memory, then flush immediately:
//! store.inventory().save(&inventory)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::inventory::InventoryFile;
pub use repository::sales::SalesFile;

use std::path::Path;

// =============================================================================
// Store Facade
// =============================================================================

/// Bundles the two backing files behind one handle.
///
/// Opening performs no I/O; each file is read lazily on `load` and
/// rewritten in full on `save`. Missing files are not an error - they
/// simply load as empty, and spring into existence on the first save.
#[derive(Debug, Clone)]
pub struct Store {
    inventory: InventoryFile,
    sales: SalesFile,
}

impl Store {
    /// Creates a store over the given file locations.
    pub fn open(inventory_path: impl AsRef<Path>, sales_path: impl AsRef<Path>) -> Self {
        Store {
            inventory: InventoryFile::new(inventory_path),
            sales: SalesFile::new(sales_path),
        }
    }

    /// The inventory backing file.
    pub fn inventory(&self) -> &InventoryFile {
        &self.inventory
    }

    /// The sales-ledger backing file.
    pub fn sales(&self) -> &SalesFile {
        &self.sales
    }
}
