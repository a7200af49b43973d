//! MemTable implementation
//!
//! BTreeSet-based table of owned row buffers.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::sync::Arc;

use crate::config::Config;
use crate::error::{MemDbError, Result};
use crate::row::{compare_key, Row, RowView, Value};
use crate::schema::Schema;

use super::{KeyedRow, MemTableIterator};

/// In-memory table kept sorted by (index column, primary column)
///
/// ## Ownership
/// - `insert_row` moves the row's buffer into the table
/// - A replaced row (upsert) is dropped, freeing its string payloads
/// - A rejected row (strict insert) comes back in `MemDbError::DuplicateKey`
pub struct MemTable {
    /// Schema every stored row follows
    schema: Arc<Schema>,

    /// Stored rows, unique under the row comparator
    rows: BTreeSet<KeyedRow>,

    /// Policy used by `insert`
    allow_update: bool,
}

impl MemTable {
    /// Create an empty table with upsert as the default insert policy
    pub fn new(schema: impl Into<Arc<Schema>>) -> Self {
        Self {
            schema: schema.into(),
            rows: BTreeSet::new(),
            allow_update: true,
        }
    }

    /// Create an empty table taking its insert policy from `config`
    pub fn with_config(schema: impl Into<Arc<Schema>>, config: &Config) -> Self {
        let mut table = Self::new(schema);
        table.allow_update = config.allow_update;
        table
    }

    pub fn schema(&self) -> &Arc<Schema> {
        &self.schema
    }

    /// Start a new row against this table's schema
    pub fn new_row(&self) -> Row {
        Row::new(&self.schema)
    }

    /// Number of stored rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Insert using the table's default policy
    pub fn insert(&mut self, row: Row) -> Result<()> {
        self.insert_row(row, self.allow_update)
    }

    /// Insert a row, taking ownership of its buffer
    ///
    /// When a stored row has the same (index, primary) key:
    /// - `allow_update = true`: the stored row is dropped and replaced
    /// - `allow_update = false`: the table is left unchanged and the row is
    ///   returned inside `MemDbError::DuplicateKey`
    ///
    /// # Panics
    /// If the row was built against a different schema.
    pub fn insert_row(&mut self, row: Row, allow_update: bool) -> Result<()> {
        assert!(
            Arc::ptr_eq(row.schema(), &self.schema) || **row.schema() == *self.schema,
            "row was built against a different schema"
        );

        let keyed = KeyedRow(row.into_buffer());

        if allow_update {
            if let Some(replaced) = self.rows.replace(keyed) {
                tracing::trace!(key = ?replaced.0.view().index(), "Upsert replaced existing row");
            }
            return Ok(());
        }

        if self.rows.contains(&keyed) {
            tracing::trace!(key = ?keyed.0.view().index(), "Strict insert rejected duplicate key");
            return Err(MemDbError::DuplicateKey {
                row: Box::new(Row::from_buffer(keyed.0)),
            });
        }

        self.rows.insert(keyed);
        Ok(())
    }

    /// Drop every stored row
    pub fn clear(&mut self) {
        let count = self.rows.len();
        self.rows.clear();
        tracing::debug!(rows = count, "MemTable cleared");
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Cursor positioned at the first row
    pub fn iter(&self) -> MemTableIterator<'_> {
        let mut it = MemTableIterator::new(self);
        it.seek_to_first();
        it
    }

    /// All rows in ascending key order
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> + '_ {
        self.rows.iter().map(|keyed| keyed.0.view())
    }

    /// Point lookup of the unique row with this (index, primary) key
    pub fn get(&self, index: impl Into<Value>, primary: impl Into<Value>) -> Option<RowView<'_>> {
        let index = index.into();
        let primary = primary.into();

        let mut it = MemTableIterator::new(self);
        it.seek_pair(index.clone(), primary.clone());
        if !it.valid() {
            return None;
        }

        let row = it.row_at();
        match compare_key(row.buffer(), index.as_ref(), Some(primary.as_ref())) {
            std::cmp::Ordering::Equal => Some(row),
            _ => None,
        }
    }

    pub(super) fn entries(&self) -> &BTreeSet<KeyedRow> {
        &self.rows
    }

    // =========================================================================
    // Diagnostics
    // =========================================================================

    /// Write the header and every row, tab-separated, in key order
    pub fn dump<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", self.schema.header())?;
        for row in self.rows() {
            writeln!(out, "{}", row)?;
        }
        Ok(())
    }

    /// `dump` to stdout
    pub fn print_all(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.dump(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

impl std::fmt::Debug for MemTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemTable")
            .field("schema", &self.schema)
            .field("rows", &self.rows.len())
            .field("allow_update", &self.allow_update)
            .finish()
    }
}
