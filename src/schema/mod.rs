//! Schema Module
//!
//! Declares the columns of a table and how they are laid out in a row buffer.
//!
//! ## Layout
//! Columns are packed back to back in declaration order:
//! ```text
//! ┌────────────┬──────────────────┬────────────┬──────────────────┐
//! │ from_id(4) │ from_name(slot)  │ to_id (4)  │ to_name (slot)   │
//! └────────────┴──────────────────┴────────────┴──────────────────┘
//! ```
//! Int32 columns take 4 bytes; string columns take a pointer-width slot.
//!
//! ## Keys
//! - The index column is always column 0 (the sort key)
//! - The primary column is chosen by name and breaks ties between equal
//!   index values

mod column;

pub use column::{Column, ColumnType, INT32_SIZE, STRING_SLOT_SIZE};

use std::collections::HashSet;

use crate::error::{MemDbError, Result};

/// Immutable table schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    /// Columns in declaration order
    columns: Vec<Column>,

    /// Column number of the primary (tie-break) column
    primary: usize,

    /// Total row buffer length
    row_byte_size: usize,
}

impl Schema {
    /// The index column is always the first declared column
    pub const INDEX_COLUMN: usize = 0;

    /// Build a schema from ordered (name, type) pairs
    ///
    /// Fails if no columns are given, a name repeats, or `primary` does not
    /// name a declared column.
    pub fn new<I, N>(columns: I, primary: &str) -> Result<Self>
    where
        I: IntoIterator<Item = (N, ColumnType)>,
        N: Into<String>,
    {
        let mut laid_out = Vec::new();
        let mut seen = HashSet::new();
        let mut row_byte_size = 0;

        for (name, column_type) in columns {
            let name = name.into();
            if !seen.insert(name.clone()) {
                return Err(MemDbError::DuplicateColumn { name });
            }
            laid_out.push(Column::new(name, column_type, row_byte_size));
            row_byte_size += column_type.byte_size();
        }

        if laid_out.is_empty() {
            return Err(MemDbError::EmptySchema);
        }

        let primary = laid_out
            .iter()
            .position(|c| c.name == primary)
            .ok_or_else(|| MemDbError::UnknownPrimaryColumn {
                name: primary.to_string(),
            })?;

        tracing::debug!(
            columns = laid_out.len(),
            row_byte_size,
            index = %laid_out[Self::INDEX_COLUMN].name,
            primary = %laid_out[primary].name,
            "Schema created"
        );

        Ok(Self {
            columns: laid_out,
            primary,
            row_byte_size,
        })
    }

    /// Convenience constructor over a borrowed column list
    pub fn from_columns(columns: &[(&str, ColumnType)], primary: &str) -> Result<Self> {
        Self::new(columns.iter().copied(), primary)
    }

    // =========================================================================
    // Column Queries
    // =========================================================================

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Get a column by number
    ///
    /// # Panics
    /// If `column_number` is out of range.
    pub fn column(&self, column_number: usize) -> &Column {
        match self.columns.get(column_number) {
            Some(column) => column,
            None => panic!(
                "column {} out of range: schema has {} columns",
                column_number,
                self.columns.len()
            ),
        }
    }

    /// Byte offset of a column within the row buffer
    pub fn column_position(&self, column_number: usize) -> usize {
        self.column(column_number).offset
    }

    pub fn column_type(&self, column_number: usize) -> ColumnType {
        self.column(column_number).column_type
    }

    pub fn column_name(&self, column_number: usize) -> &str {
        &self.column(column_number).name
    }

    /// Look up a column number by name
    pub fn column_number(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Total length of a row buffer
    pub fn row_byte_size(&self) -> usize {
        self.row_byte_size
    }

    // =========================================================================
    // Key Columns
    // =========================================================================

    pub fn index_column_number(&self) -> usize {
        Self::INDEX_COLUMN
    }

    pub fn index_position(&self) -> usize {
        self.column_position(Self::INDEX_COLUMN)
    }

    pub fn index_type(&self) -> ColumnType {
        self.column_type(Self::INDEX_COLUMN)
    }

    pub fn primary_column_number(&self) -> usize {
        self.primary
    }

    pub fn primary_position(&self) -> usize {
        self.column_position(self.primary)
    }

    pub fn primary_type(&self) -> ColumnType {
        self.column_type(self.primary)
    }

    /// True when the primary column is the index column, so the index
    /// value alone identifies a row
    pub fn primary_is_index(&self) -> bool {
        self.primary_position() == self.index_position()
    }

    /// Column names joined by tabs, for diagnostic dumps
    pub fn header(&self) -> String {
        self.columns
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>()
            .join("\t")
    }
}
