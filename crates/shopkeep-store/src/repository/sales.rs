//! # Sales Repository
//!
//! File operations for the sales ledger.
//!
//! ## Line Format
//! ```text
//! name1,quantity1,price1,name2,quantity2,price2,...
//!
//! Widget,3,5.00                      ← one-item transaction
//! Widget,2,5.00,Gadget,1,3.99        ← two-item transaction
//! ```
//!
//! One line per completed transaction, a flattened sequence of
//! `(name, quantity, price)` triples - the field count is always a
//! nonzero multiple of three. The flattening happens HERE and only
//! here; in memory a sale is always a typed line-item list.

use std::path::{Path, PathBuf};

use tracing::debug;

use shopkeep_core::{LineItem, Money, SaleRecord, SalesLedger};

use crate::error::{StoreError, StoreResult};
use crate::repository::{read_or_empty, rewrite};

/// Fields per flattened line item.
const TRIPLE: usize = 3;

/// Repository for the sales-ledger backing file.
#[derive(Debug, Clone)]
pub struct SalesFile {
    path: PathBuf,
}

impl SalesFile {
    /// Creates a repository over the given file location. No I/O yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        SalesFile {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full ledger, oldest transaction first.
    ///
    /// Absent file ⇒ empty ledger. A line whose field count is not a
    /// nonzero multiple of three, or whose quantity/price fields fail
    /// to parse, aborts the load with file and line number.
    pub fn load(&self) -> StoreResult<SalesLedger> {
        let contents = read_or_empty(&self.path)?;

        let mut records = Vec::new();
        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            records.push(self.parse_line(idx + 1, line)?);
        }

        debug!(path = %self.path.display(), count = records.len(), "Loaded sales ledger");
        Ok(SalesLedger::from_records(records))
    }

    /// Rewrites the backing file from the in-memory ledger.
    ///
    /// The ledger is append-only in memory, but persistence is still a
    /// whole-file rewrite like every other mutation in the system.
    pub fn save(&self, ledger: &SalesLedger) -> StoreResult<()> {
        let mut contents = String::new();
        for record in ledger.records() {
            contents.push_str(&Self::flatten(record));
            contents.push('\n');
        }

        rewrite(&self.path, &contents)?;
        debug!(path = %self.path.display(), count = ledger.len(), "Saved sales ledger");
        Ok(())
    }

    /// Flattens a record into its on-disk triple sequence.
    fn flatten(record: &SaleRecord) -> String {
        record
            .items()
            .iter()
            .map(|item| {
                format!(
                    "{},{},{}",
                    item.name,
                    item.quantity,
                    item.unit_price.to_literal()
                )
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Rebuilds a typed record from one flattened line.
    fn parse_line(&self, line_no: usize, line: &str) -> StoreResult<SaleRecord> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.is_empty() || fields.len() % TRIPLE != 0 {
            return Err(StoreError::malformed(
                &self.path,
                line_no,
                format!(
                    "field count {} is not a multiple of {}",
                    fields.len(),
                    TRIPLE
                ),
            ));
        }

        let mut items = Vec::with_capacity(fields.len() / TRIPLE);
        for triple in fields.chunks(TRIPLE) {
            let quantity: i64 = triple[1].trim().parse().map_err(|_| {
                StoreError::malformed(
                    &self.path,
                    line_no,
                    format!("invalid quantity '{}'", triple[1]),
                )
            })?;

            let unit_price: Money = triple[2].parse().map_err(|_| {
                StoreError::malformed(
                    &self.path,
                    line_no,
                    format!("invalid price '{}'", triple[2]),
                )
            })?;

            items.push(LineItem::new(triple[0], quantity, unit_price));
        }

        Ok(SaleRecord::new(items))
    }
}
