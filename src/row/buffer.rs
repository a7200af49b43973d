//! Row buffer codec
//!
//! A row is a fixed-length byte region of `schema.row_byte_size()` bytes.
//!
//! ## Column Encoding
//! ```text
//! Int32:   [value: i32 LE (4)]
//! String:  [payload handle: usize LE (pointer width)] ──► payloads[handle]
//! ```
//! String payloads live outside the fixed region, in storage owned by the
//! row itself. Dropping a `RowBuffer` releases the region and every payload
//! together, so there is no separate free path to get wrong.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use bytes::{Buf, BytesMut};

use crate::schema::{ColumnType, Schema, STRING_SLOT_SIZE};

use super::value::{Value, ValueRef};
use super::view::RowView;

/// An owned, schema-laid-out row
#[derive(Clone)]
pub struct RowBuffer {
    /// Schema the layout follows
    schema: Arc<Schema>,

    /// Fixed region: inline ints and payload handles
    data: BytesMut,

    /// Out-of-line string payloads, addressed by handle
    payloads: Vec<Box<str>>,
}

impl RowBuffer {
    /// Allocate a zeroed row: ints read 0, strings read ""
    pub fn alloc(schema: &Arc<Schema>) -> Self {
        let mut data = BytesMut::zeroed(schema.row_byte_size());
        let mut payloads: Vec<Box<str>> = Vec::new();

        for column in schema.columns() {
            if column.column_type == ColumnType::String {
                let handle: usize = payloads.len();
                data[column.offset..column.end_offset()].copy_from_slice(&handle.to_le_bytes());
                payloads.push(Box::from(""));
            }
        }

        Self {
            schema: Arc::clone(schema),
            data,
            payloads,
        }
    }

    /// Build a key-only row for seeking
    ///
    /// The index column (and the primary column, when given) carry the
    /// requested values. An unspecified primary is filled with the smallest
    /// value of its type so the probe sorts before every row sharing its
    /// index value. A given primary must match the primary column's type
    /// even when that column is the index column.
    pub(crate) fn probe(schema: &Arc<Schema>, index: &Value, primary: Option<&Value>) -> Self {
        let mut row = Self::alloc(schema);
        if let Some(primary) = primary {
            let expected = schema.primary_type();
            assert!(
                primary.column_type() == expected,
                "schema mismatch: primary column is {}, got a {} value",
                expected,
                primary.column_type()
            );
        }
        if !schema.primary_is_index() {
            let filler = Value::min_of(schema.primary_type());
            row.write_value(schema.primary_column_number(), primary.unwrap_or(&filler));
        }
        row.write_value(schema.index_column_number(), index);
        row
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// The fixed-layout region
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes held by this row, fixed region plus string payloads
    pub fn heap_size(&self) -> usize {
        self.data.len() + self.payloads.iter().map(|p| p.len()).sum::<usize>()
    }

    /// Borrow this row in its read role
    pub fn view(&self) -> RowView<'_> {
        RowView::new(self)
    }

    // =========================================================================
    // Decoding
    // =========================================================================

    pub(crate) fn read_int(&self, column_number: usize) -> i32 {
        let slot = self.slot(column_number, ColumnType::Int32);
        let mut bytes = &self.data[slot];
        bytes.get_i32_le()
    }

    pub(crate) fn read_str(&self, column_number: usize) -> &str {
        let slot = self.slot(column_number, ColumnType::String);
        &self.payloads[self.handle_at(slot)]
    }

    /// Read any column according to its declared type
    pub(crate) fn read_value(&self, column_number: usize) -> ValueRef<'_> {
        match self.schema.column_type(column_number) {
            ColumnType::Int32 => ValueRef::Int32(self.read_int(column_number)),
            ColumnType::String => ValueRef::Str(self.read_str(column_number)),
        }
    }

    // =========================================================================
    // Encoding
    // =========================================================================

    pub(crate) fn write_int(&mut self, column_number: usize, value: i32) {
        let slot = self.slot(column_number, ColumnType::Int32);
        self.data[slot].copy_from_slice(&value.to_le_bytes());
    }

    /// Copy `value` into this row's payload for the column
    pub(crate) fn write_str(&mut self, column_number: usize, value: &str) {
        let slot = self.slot(column_number, ColumnType::String);
        let handle = self.handle_at(slot);
        self.payloads[handle] = Box::from(value);
    }

    pub(crate) fn write_value(&mut self, column_number: usize, value: &Value) {
        match value {
            Value::Int32(v) => self.write_int(column_number, *v),
            Value::String(s) => self.write_str(column_number, s),
        }
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Byte range of a column, checking it has the expected type
    fn slot(&self, column_number: usize, expected: ColumnType) -> Range<usize> {
        let column = self.schema.column(column_number);
        assert!(
            column.column_type == expected,
            "schema mismatch: column '{}' is {}, accessed as {}",
            column.name,
            column.column_type,
            expected
        );
        column.offset..column.end_offset()
    }

    fn handle_at(&self, slot: Range<usize>) -> usize {
        let mut raw = [0u8; STRING_SLOT_SIZE];
        raw.copy_from_slice(&self.data[slot]);
        usize::from_le_bytes(raw)
    }
}

impl fmt::Debug for RowBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.schema.num_columns()).map(|c| self.read_value(c)))
            .finish()
    }
}
