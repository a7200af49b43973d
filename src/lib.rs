//! # memdb
//!
//! An in-memory sorted table engine with:
//! - Schema-driven fixed-layout row buffers
//! - Composite (index column, primary column) ordering
//! - Insert with upsert, or strict insert rejecting duplicate keys
//! - Cursor iteration with seek-to-key range scans
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Caller                              │
//! │            (builds rows, inserts, scans)                    │
//! └──────────────┬──────────────────────────────┬───────────────┘
//!                │ Row (owned)                  │ seek / next
//!                ▼                              ▼
//!   ┌─────────────────────────┐     ┌─────────────────────────┐
//!   │        MemTable         │◄────│    MemTableIterator     │
//!   │  BTreeSet<RowBuffer>    │     │   (borrows the table)   │
//!   └────────────┬────────────┘     └────────────┬────────────┘
//!                │ compare_rows                  │ RowView
//!                ▼                               ▼
//!   ┌─────────────────────────┐     ┌─────────────────────────┐
//!   │   Row buffer codec      │────►│         Schema          │
//!   │ (ints inline, strings   │     │ (names, types, offsets) │
//!   │   behind payload slot)  │     └─────────────────────────┘
//!   └─────────────────────────┘
//! ```
//!
//! ## Example
//! ```
//! use memdb::{ColumnType, MemTable, Schema};
//!
//! let schema = Schema::from_columns(
//!     &[
//!         ("from_id", ColumnType::Int32),
//!         ("from_name", ColumnType::String),
//!         ("to_id", ColumnType::Int32),
//!         ("to_name", ColumnType::String),
//!     ],
//!     "to_id",
//! )
//! .unwrap();
//! let mut table = MemTable::new(schema);
//!
//! for (from, from_name, to, to_name) in [(1, "alice", 3, "eve"), (1, "alice", 2, "bob")] {
//!     let row = table.new_row().push(from).push(from_name).push(to).push(to_name);
//!     table.insert(row).unwrap();
//! }
//!
//! let mut it = table.iter();
//! it.seek(1);
//! let mut to_ids = Vec::new();
//! while it.valid_index(1) {
//!     to_ids.push(it.row_at().get_int_by_name("to_id"));
//!     it.next();
//! }
//! assert_eq!(to_ids, vec![2, 3]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod schema;
pub mod row;
pub mod memtable;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{MemDbError, Result};
pub use config::Config;
pub use schema::{ColumnType, Schema};
pub use row::{Row, RowBuffer, RowView, Value, ValueRef};
pub use memtable::{MemTable, MemTableIterator};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of memdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
