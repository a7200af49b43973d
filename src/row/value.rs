//! Column values
//!
//! A closed set of value variants, one per `ColumnType`.

use std::fmt;

use crate::schema::ColumnType;

/// An owned column value
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Value {
    Int32(i32),
    String(String),
}

impl Value {
    pub fn column_type(&self) -> ColumnType {
        match self {
            Value::Int32(_) => ColumnType::Int32,
            Value::String(_) => ColumnType::String,
        }
    }

    pub fn as_ref(&self) -> ValueRef<'_> {
        match self {
            Value::Int32(v) => ValueRef::Int32(*v),
            Value::String(s) => ValueRef::Str(s),
        }
    }

    /// The smallest value of a type; used to fill key columns of seek probes
    pub fn min_of(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Int32 => Value::Int32(i32::MIN),
            ColumnType::String => Value::String(String::new()),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.as_ref(), f)
    }
}

/// A column value borrowed from a row buffer
///
/// Ordering is numeric for `Int32` and bytewise lexicographic for `Str`.
/// Values of different variants never meet in a comparison because both
/// sides always come from the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueRef<'a> {
    Int32(i32),
    Str(&'a str),
}

impl ValueRef<'_> {
    pub fn column_type(&self) -> ColumnType {
        match self {
            ValueRef::Int32(_) => ColumnType::Int32,
            ValueRef::Str(_) => ColumnType::String,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            ValueRef::Int32(v) => Value::Int32(*v),
            ValueRef::Str(s) => Value::String((*s).to_string()),
        }
    }
}

impl fmt::Display for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueRef::Int32(v) => write!(f, "{}", v),
            ValueRef::Str(s) => f.write_str(s),
        }
    }
}
