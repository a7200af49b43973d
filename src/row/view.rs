//! Read-only row views
//!
//! A `RowView` borrows a row buffer (usually one owned by a `MemTable`)
//! and decodes columns on demand. It never owns or frees anything.

use std::fmt;

use super::buffer::RowBuffer;
use super::value::{Value, ValueRef};

/// Borrowed, typed access to one row
#[derive(Clone, Copy)]
pub struct RowView<'a> {
    buf: &'a RowBuffer,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(buf: &'a RowBuffer) -> Self {
        Self { buf }
    }

    /// The underlying buffer
    pub fn buffer(&self) -> &'a RowBuffer {
        self.buf
    }

    /// # Panics
    /// If the column is not an Int32 column.
    pub fn get_int(&self, column_number: usize) -> i32 {
        self.buf.read_int(column_number)
    }

    /// Borrow a string column without copying
    ///
    /// # Panics
    /// If the column is not a String column.
    pub fn get_str(&self, column_number: usize) -> &'a str {
        self.buf.read_str(column_number)
    }

    /// Copy a string column out of the row
    pub fn get_string(&self, column_number: usize) -> String {
        self.get_str(column_number).to_string()
    }

    pub fn get_value(&self, column_number: usize) -> ValueRef<'a> {
        self.buf.read_value(column_number)
    }

    pub fn get_int_by_name(&self, name: &str) -> i32 {
        self.get_int(self.resolve(name))
    }

    pub fn get_string_by_name(&self, name: &str) -> String {
        self.get_string(self.resolve(name))
    }

    /// Index column value
    pub fn index(&self) -> ValueRef<'a> {
        self.get_value(self.buf.schema().index_column_number())
    }

    /// Primary column value
    pub fn primary(&self) -> ValueRef<'a> {
        self.get_value(self.buf.schema().primary_column_number())
    }

    /// All columns, copied out in declared order
    pub fn values(&self) -> Vec<Value> {
        (0..self.buf.schema().num_columns())
            .map(|c| self.get_value(c).to_value())
            .collect()
    }

    fn resolve(&self, name: &str) -> usize {
        match self.buf.schema().column_number(name) {
            Some(column) => column,
            None => panic!("schema has no column named '{}'", name),
        }
    }
}

/// Tab-separated columns in declared order
impl fmt::Display for RowView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for column in 0..self.buf.schema().num_columns() {
            if column > 0 {
                f.write_str("\t")?;
            }
            write!(f, "{}", self.get_value(column))?;
        }
        Ok(())
    }
}

impl fmt::Debug for RowView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.buf, f)
    }
}
