//! Row ordering
//!
//! Rows sort by the index column, then by the primary column. Two rows that
//! agree on both are the same key, whatever their other columns hold.

use std::cmp::Ordering;

use crate::schema::Schema;

use super::buffer::RowBuffer;
use super::value::ValueRef;

/// Total order over two rows of the same schema
pub fn compare_rows(a: &RowBuffer, b: &RowBuffer, schema: &Schema) -> Ordering {
    let index = schema.index_column_number();
    match a.read_value(index).cmp(&b.read_value(index)) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    if schema.primary_is_index() {
        return Ordering::Equal;
    }

    let primary = schema.primary_column_number();
    a.read_value(primary).cmp(&b.read_value(primary))
}

/// Compare a row's key against a bare (index, primary) key
///
/// A missing `primary` compares as the smallest value, so every row with
/// an equal index value orders at or after the key.
pub fn compare_key(
    row: &RowBuffer,
    index: ValueRef<'_>,
    primary: Option<ValueRef<'_>>,
) -> Ordering {
    let schema = row.schema();
    match row.read_value(schema.index_column_number()).cmp(&index) {
        Ordering::Equal => {}
        unequal => return unequal,
    }

    match primary {
        Some(primary) if !schema.primary_is_index() => {
            row.read_value(schema.primary_column_number()).cmp(&primary)
        }
        Some(_) => Ordering::Equal,
        None if schema.primary_is_index() => Ordering::Equal,
        None => Ordering::Greater,
    }
}
