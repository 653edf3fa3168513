//! # Repositories
//!
//! One repository per backing file:
//!
//! - [`inventory`] - `products.txt`, one product per line
//! - [`sales`] - `sales.txt`, one flattened transaction per line
//!
//! Both follow the same contract: `load` parses the whole file (absent
//! file ⇒ empty store), `save` rewrites the whole file. There is no
//! incremental persistence of any kind.

pub mod inventory;
pub mod sales;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{StoreError, StoreResult};

/// Reads a data file to a string, treating a missing file as empty.
pub(crate) fn read_or_empty(path: &Path) -> StoreResult<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(StoreError::io(path, err)),
    }
}

/// Rewrites a data file in full. Last writer wins; a crash mid-write
/// can corrupt the file - accepted, documented behavior of the format.
pub(crate) fn rewrite(path: &Path, contents: &str) -> StoreResult<()> {
    fs::write(path, contents).map_err(|err| StoreError::io(path, err))
}
