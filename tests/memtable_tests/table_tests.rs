//! MemTable Tests
//!
//! Tests verify:
//! - Insert ordering
//! - Upsert (last write wins)
//! - Strict insert rejection and ownership return
//! - Clear functionality
//! - Point lookup
//! - Diagnostic dump

use std::sync::Arc;

use memdb::schema::{ColumnType, Schema};
use memdb::{Config, MemDbError, MemTable, Row};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// =============================================================================
// Helper Functions
// =============================================================================

fn edge_schema() -> Arc<Schema> {
    Arc::new(
        Schema::from_columns(
            &[
                ("from_id", ColumnType::Int32),
                ("from_name", ColumnType::String),
                ("to_id", ColumnType::Int32),
                ("to_name", ColumnType::String),
            ],
            "to_id",
        )
        .unwrap(),
    )
}

fn edge(table: &MemTable, from: i32, from_name: &str, to: i32, to_name: &str) -> Row {
    table.new_row().push(from).push(from_name).push(to).push(to_name)
}

fn keys(table: &MemTable) -> Vec<(i32, i32)> {
    table
        .rows()
        .map(|r| (r.get_int(0), r.get_int(2)))
        .collect()
}

// =============================================================================
// Basic Operations Tests
// =============================================================================

#[test]
fn test_new_memtable_is_empty() {
    let table = MemTable::new(edge_schema());
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert!(!table.iter().valid());
}

#[test]
fn test_insert_orders_rows() {
    let mut table = MemTable::new(edge_schema());

    table.insert(edge(&table, 2, "bob", 1, "alice")).unwrap();
    table.insert(edge(&table, 1, "alice", 3, "eve")).unwrap();
    table.insert(edge(&table, 1, "alice", 2, "bob")).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(keys(&table), vec![(1, 2), (1, 3), (2, 1)]);
}

#[test]
fn test_random_inserts_come_back_sorted() {
    let mut table = MemTable::new(edge_schema());
    let mut pairs: Vec<(i32, i32)> = (0..50).flat_map(|a| (0..20).map(move |b| (a, b))).collect();
    let mut rng = StdRng::seed_from_u64(42);
    pairs.shuffle(&mut rng);

    for &(from, to) in &pairs {
        let row = edge(&table, from, &format!("f{}", from), to, &format!("t{}", to));
        table.insert(row).unwrap();
    }

    pairs.sort();
    assert_eq!(table.len(), pairs.len());
    assert_eq!(keys(&table), pairs);

    for row in table.rows() {
        assert_eq!(row.get_string(1), format!("f{}", row.get_int(0)));
        assert_eq!(row.get_string(3), format!("t{}", row.get_int(2)));
    }
}

// =============================================================================
// Upsert Tests
// =============================================================================

#[test]
fn test_upsert_replaces_existing_row() {
    let mut table = MemTable::new(edge_schema());

    table.insert_row(edge(&table, 1, "alice", 2, "bob"), true).unwrap();
    table.insert_row(edge(&table, 1, "ALICE", 2, "BOB"), true).unwrap();

    assert_eq!(table.len(), 1);
    let row = table.get(1, 2).unwrap();
    assert_eq!(row.get_string_by_name("from_name"), "ALICE");
    assert_eq!(row.get_string_by_name("to_name"), "BOB");
}

#[test]
fn test_same_index_different_primary_are_distinct() {
    let mut table = MemTable::new(edge_schema());
    table.insert(edge(&table, 1, "a", 2, "b")).unwrap();
    table.insert(edge(&table, 1, "a", 3, "c")).unwrap();
    assert_eq!(table.len(), 2);
}

// =============================================================================
// Strict Insert Tests
// =============================================================================

#[test]
fn test_strict_insert_rejects_duplicate() {
    let mut table = MemTable::new(edge_schema());
    table.insert_row(edge(&table, 1, "alice", 2, "bob"), false).unwrap();

    let err = table
        .insert_row(edge(&table, 1, "mallory", 2, "trudy"), false)
        .unwrap_err();
    assert!(matches!(err, MemDbError::DuplicateKey { .. }));

    assert_eq!(table.len(), 1);
    let row = table.get(1, 2).unwrap();
    assert_eq!(row.get_string(1), "alice");
    assert_eq!(row.get_string(3), "bob");
}

#[test]
fn test_rejected_row_returns_to_caller() {
    let mut table = MemTable::new(edge_schema());
    table.insert(edge(&table, 1, "alice", 2, "bob")).unwrap();

    let err = table
        .insert_row(edge(&table, 1, "mallory", 2, "trudy"), false)
        .unwrap_err();
    let mut rejected = err.into_row().unwrap();
    assert_eq!(rejected.view().get_string(1), "mallory");

    // Re-key the rejected row and try again
    rejected.put_int(5, 2);
    table.insert_row(rejected, false).unwrap();
    assert_eq!(keys(&table), vec![(1, 2), (1, 5)]);
}

#[test]
fn test_strict_config_sets_default_policy() {
    let config = Config::builder().allow_update(false).build().unwrap();
    let mut table = MemTable::with_config(edge_schema(), &config);

    table.insert(edge(&table, 1, "a", 2, "b")).unwrap();
    assert!(table.insert(edge(&table, 1, "x", 2, "y")).is_err());

    // Per-call override still upserts
    table.insert_row(edge(&table, 1, "x", 2, "y"), true).unwrap();
    assert_eq!(table.get(1, 2).unwrap().get_string(1), "x");
}

#[test]
#[should_panic(expected = "different schema")]
fn test_insert_row_from_other_schema_panics() {
    let mut table = MemTable::new(edge_schema());
    let other = Arc::new(Schema::from_columns(&[("k", ColumnType::Int32)], "k").unwrap());
    let _ = table.insert(Row::new(&other).push(1));
}

#[test]
fn test_insert_row_from_equal_schema_is_accepted() {
    let mut table = MemTable::new(edge_schema());
    let twin = edge_schema();
    let row = Row::new(&twin).push(1).push("a").push(2).push("b");
    table.insert(row).unwrap();
    assert_eq!(table.len(), 1);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[test]
fn test_clear_empties_table() {
    let mut table = MemTable::new(edge_schema());
    for i in 0..10 {
        table.insert(edge(&table, i, "a", i, "b")).unwrap();
    }

    table.clear();

    assert!(table.is_empty());
    assert!(!table.iter().valid());
}

#[test]
fn test_clear_on_empty_table() {
    let mut table = MemTable::new(edge_schema());
    table.clear();
    table.clear();
    assert!(table.is_empty());
}

#[test]
fn test_insert_after_clear() {
    let mut table = MemTable::new(edge_schema());
    table.insert_row(edge(&table, 1, "a", 2, "b"), false).unwrap();
    table.clear();

    table.insert_row(edge(&table, 1, "c", 2, "d"), false).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(1, 2).unwrap().get_string(1), "c");
}

// =============================================================================
// Point Lookup Tests
// =============================================================================

#[test]
fn test_get_missing_key() {
    let mut table = MemTable::new(edge_schema());
    table.insert(edge(&table, 1, "a", 2, "b")).unwrap();
    table.insert(edge(&table, 3, "a", 1, "b")).unwrap();

    assert!(table.get(1, 3).is_none());
    assert!(table.get(2, 1).is_none());
    assert!(table.get(4, 0).is_none());
    assert!(table.get(1, 2).is_some());
}

// =============================================================================
// Dump Tests
// =============================================================================

#[test]
fn test_dump_prints_header_and_sorted_rows() {
    let mut table = MemTable::new(edge_schema());
    table.insert(edge(&table, 2, "bob", 1, "alice")).unwrap();
    table.insert(edge(&table, 1, "alice", 2, "bob")).unwrap();

    let mut out = Vec::new();
    table.dump(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "from_id\tfrom_name\tto_id\tto_name\n1\talice\t2\tbob\n2\tbob\t1\talice\n"
    );
}
