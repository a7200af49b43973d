//! Row builder
//!
//! Write-in-progress rows. A `Row` owns its buffer until it is handed to
//! `MemTable::insert_row`.

use std::sync::Arc;

use crate::schema::Schema;

use super::buffer::RowBuffer;
use super::value::Value;
use super::view::RowView;

/// A row being filled, column by column
///
/// ```
/// use memdb::schema::{ColumnType, Schema};
/// use memdb::row::Row;
/// use std::sync::Arc;
///
/// let schema = Arc::new(
///     Schema::from_columns(&[("id", ColumnType::Int32), ("name", ColumnType::String)], "id").unwrap(),
/// );
/// let row = Row::new(&schema).push(7).push("seven");
/// assert_eq!(row.view().get_string(1), "seven");
/// ```
#[derive(Debug, Clone)]
pub struct Row {
    buf: RowBuffer,

    /// Next column filled by a sequential append
    cursor: usize,
}

impl Row {
    /// Allocate an empty row for the schema
    pub fn new(schema: &Arc<Schema>) -> Self {
        Self {
            buf: RowBuffer::alloc(schema),
            cursor: 0,
        }
    }

    /// Take ownership of an existing buffer, restarting the append cursor
    pub fn from_buffer(buf: RowBuffer) -> Self {
        Self { buf, cursor: 0 }
    }

    /// Build a row from values given in declared column order
    ///
    /// # Panics
    /// If there are more values than columns, or a value's type does not
    /// match its column.
    pub fn from_values(schema: &Arc<Schema>, values: &[Value]) -> Self {
        let mut row = Self::new(schema);
        for value in values {
            row.append(value);
        }
        row
    }

    pub fn schema(&self) -> &Arc<Schema> {
        self.buf.schema()
    }

    /// Number of columns filled by sequential appends so far
    pub fn appended(&self) -> usize {
        self.cursor
    }

    // =========================================================================
    // Sequential Appends
    // =========================================================================

    pub fn append_int(&mut self, value: i32) -> &mut Self {
        let column = self.advance();
        self.buf.write_int(column, value);
        self
    }

    pub fn append_string(&mut self, value: &str) -> &mut Self {
        let column = self.advance();
        self.buf.write_str(column, value);
        self
    }

    pub fn append(&mut self, value: &Value) -> &mut Self {
        match value {
            Value::Int32(v) => self.append_int(*v),
            Value::String(s) => self.append_string(s),
        }
    }

    /// By-value append, for chaining: `Row::new(&s).push(1).push("a")`
    pub fn push(mut self, value: impl Into<Value>) -> Self {
        self.append(&value.into());
        self
    }

    // =========================================================================
    // Random Access
    // =========================================================================

    pub fn put_int(&mut self, value: i32, column_number: usize) -> &mut Self {
        self.buf.write_int(column_number, value);
        self
    }

    pub fn put_string(&mut self, value: &str, column_number: usize) -> &mut Self {
        self.buf.write_str(column_number, value);
        self
    }

    pub fn put(&mut self, value: &Value, column_number: usize) -> &mut Self {
        self.buf.write_value(column_number, value);
        self
    }

    // =========================================================================
    // Ownership
    // =========================================================================

    /// Read what has been written so far
    pub fn view(&self) -> RowView<'_> {
        self.buf.view()
    }

    /// Give up the builder, keeping the buffer
    pub fn into_buffer(self) -> RowBuffer {
        self.buf
    }

    /// Claim the next column for a sequential append
    fn advance(&mut self) -> usize {
        let total = self.buf.schema().num_columns();
        assert!(self.cursor < total, "row already has all {} columns", total);
        let column = self.cursor;
        self.cursor += 1;
        column
    }
}

impl From<Row> for RowBuffer {
    fn from(row: Row) -> Self {
        row.into_buffer()
    }
}

