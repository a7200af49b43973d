//! MemTable Iterator
//!
//! A cursor over the table's rows in key order.
//!
//! ## States
//! - positioned at a row (`valid()` is true)
//! - at end (`valid()` is false)
//!
//! There is no before-first state: `seek_to_first` lands directly on the
//! smallest row, or at end when the table is empty.
//!
//! ## Range Scans
//! ```text
//! it.seek(k);
//! while it.valid_index(k) { ...; it.next(); }
//! ```
//! visits every row whose index column equals `k`, in primary order.

use std::ops::Bound;

use crate::row::{RowBuffer, RowView, Value, ValueRef};
use crate::schema::ColumnType;

use super::{KeyedRow, MemTable};

/// Cursor into a `MemTable`
///
/// Holds a shared borrow of the table, so the table cannot be inserted
/// into or cleared while the cursor exists.
pub struct MemTableIterator<'a> {
    table: &'a MemTable,

    /// Current row, or None at end
    current: Option<&'a KeyedRow>,
}

impl<'a> MemTableIterator<'a> {
    /// Create a cursor at end; position it with one of the seek methods
    pub fn new(table: &'a MemTable) -> Self {
        Self {
            table,
            current: None,
        }
    }

    // =========================================================================
    // Positioning
    // =========================================================================

    /// Move to the smallest row
    pub fn seek_to_first(&mut self) {
        self.current = self.table.entries().first();
    }

    /// Move to the largest row
    pub fn seek_to_last(&mut self) {
        self.current = self.table.entries().last();
    }

    /// Move to the first row whose index column is >= `index`
    ///
    /// # Panics
    /// If `index` does not match the index column's type.
    pub fn seek(&mut self, index: impl Into<Value>) {
        let probe = RowBuffer::probe(self.table.schema(), &index.into(), None);
        self.seek_probe(probe);
    }

    /// Move to the first row whose (index, primary) key is >= the given one
    ///
    /// # Panics
    /// If either value does not match its column's type.
    pub fn seek_pair(&mut self, index: impl Into<Value>, primary: impl Into<Value>) {
        let probe = RowBuffer::probe(
            self.table.schema(),
            &index.into(),
            Some(&primary.into()),
        );
        self.seek_probe(probe);
    }

    /// Move to the first row whose key is >= the key of `row`
    pub fn seek_row(&mut self, row: RowView<'_>) {
        let probe = RowBuffer::probe(
            self.table.schema(),
            &row.index().to_value(),
            Some(&row.primary().to_value()),
        );
        self.seek_probe(probe);
    }

    /// Move to the next row in key order
    ///
    /// Each step is a fresh `range` lookup from the current row, so a full
    /// scan costs O(n log n). The cursor keeps only `&KeyedRow` so it can
    /// move in both directions.
    ///
    /// # Panics
    /// If the cursor is at end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        let current = self.positioned("next");
        self.current = self
            .table
            .entries()
            .range((Bound::Excluded(current), Bound::Unbounded))
            .next();
    }

    /// Move to the previous row in key order; moving before the first row
    /// leaves the cursor at end
    ///
    /// # Panics
    /// If the cursor is at end.
    pub fn prev(&mut self) {
        let current = self.positioned("prev");
        self.current = self
            .table
            .entries()
            .range((Bound::Unbounded, Bound::Excluded(current)))
            .next_back();
    }

    // =========================================================================
    // Validity
    // =========================================================================

    /// True iff positioned at a row
    pub fn valid(&self) -> bool {
        self.current.is_some()
    }

    /// True iff positioned at a row whose index column is <= `index`
    ///
    /// After `seek(index)` this bounds a scan to rows with that exact
    /// index value.
    pub fn valid_index(&self, index: impl Into<Value>) -> bool {
        let index = index.into();
        self.check_type(index.as_ref(), self.table.schema().index_type(), "index");
        match self.current {
            Some(keyed) => keyed.0.view().index() <= index.as_ref(),
            None => false,
        }
    }

    /// True iff positioned at a row whose index column is <= `index` and
    /// whose primary column is <= `primary`
    ///
    /// After `seek_pair(index, primary)` this admits at most the one row
    /// with exactly that key.
    pub fn valid_pair(&self, index: impl Into<Value>, primary: impl Into<Value>) -> bool {
        let primary = primary.into();
        self.check_type(primary.as_ref(), self.table.schema().primary_type(), "primary");
        if !self.valid_index(index) {
            return false;
        }
        match self.current {
            Some(keyed) => keyed.0.view().primary() <= primary.as_ref(),
            None => false,
        }
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Read-only view of the current row
    ///
    /// # Panics
    /// If the cursor is at end.
    pub fn row_at(&self) -> RowView<'a> {
        self.positioned("row_at").0.view()
    }

    /// (index, primary) key of the current row
    pub fn key(&self) -> (ValueRef<'a>, ValueRef<'a>) {
        let row = self.row_at();
        (row.index(), row.primary())
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn seek_probe(&mut self, probe: RowBuffer) {
        let probe = KeyedRow(probe);
        self.current = self
            .table
            .entries()
            .range((Bound::Included(&probe), Bound::Unbounded))
            .next();
    }

    fn positioned(&self, op: &str) -> &'a KeyedRow {
        match self.current {
            Some(keyed) => keyed,
            None => panic!("{}() called on an iterator that is not positioned at a row", op),
        }
    }

    fn check_type(&self, value: ValueRef<'_>, expected: ColumnType, role: &str) {
        assert!(
            value.column_type() == expected,
            "schema mismatch: {} column is {}, got a {} value",
            role,
            expected,
            value.column_type()
        );
    }
}
