//! Column definitions

use std::fmt;
use std::mem::size_of;

/// Width of the slot a string column occupies in the row buffer
pub const STRING_SLOT_SIZE: usize = size_of::<usize>();

/// Width of an inline Int32 column
pub const INT32_SIZE: usize = size_of::<i32>();

/// Column value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Signed 32-bit integer, stored inline
    Int32,

    /// Variable-length text, stored out of line behind a payload slot
    String,
}

impl ColumnType {
    /// Bytes this column occupies in the fixed row layout
    pub const fn byte_size(self) -> usize {
        match self {
            ColumnType::Int32 => INT32_SIZE,
            ColumnType::String => STRING_SLOT_SIZE,
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Int32 => f.write_str("Int32"),
            ColumnType::String => f.write_str("String"),
        }
    }
}

/// A column as laid out in a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name (unique within a schema)
    pub name: String,

    /// Declared type
    pub column_type: ColumnType,

    /// Byte offset within the row buffer
    pub offset: usize,
}

impl Column {
    pub(crate) fn new(name: String, column_type: ColumnType, offset: usize) -> Self {
        Self {
            name,
            column_type,
            offset,
        }
    }

    /// Bytes this column occupies in the row buffer
    pub fn size(&self) -> usize {
        self.column_type.byte_size()
    }

    /// First byte past this column
    pub fn end_offset(&self) -> usize {
        self.offset + self.size()
    }
}
