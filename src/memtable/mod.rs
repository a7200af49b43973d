//! MemTable Module
//!
//! In-memory ordered table of rows.
//!
//! ## Responsibilities
//! - Own every stored row until it is replaced or cleared
//! - Keep rows sorted by (index column, primary column)
//! - Insert with upsert, or strict insert that rejects duplicate keys
//! - Cursor iteration with seek to an (index[, primary]) key
//!
//! ## Data Structure Choice
//! Rows live in a `BTreeSet` ordered by the row comparator:
//! - Ordered keys give lower-bound seeks and in-order scans for free
//! - The set owns each `RowBuffer`; replacing or clearing drops them
//! - Cursors borrow the table, so the table cannot be mutated while a
//!   cursor is alive

mod iterator;
mod table;

pub use iterator::MemTableIterator;
pub use table::MemTable;

use std::cmp::Ordering;

use crate::row::{compare_rows, RowBuffer};

/// A stored row, ordered by its (index, primary) key
pub(crate) struct KeyedRow(pub(crate) RowBuffer);

impl Ord for KeyedRow {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_rows(&self.0, &other.0, self.0.schema())
    }
}

impl PartialOrd for KeyedRow {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for KeyedRow {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyedRow {}
