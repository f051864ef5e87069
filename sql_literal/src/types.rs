//! Literal value definitions
//!
//! This module provides the value type used for literal operands
//! and its conversions from plain Rust types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A runtime value that renders as an inline SQL literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SqlValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Decimal(String), // Store as string to preserve precision
    Boolean(bool),
    Uuid(Uuid),
    Date(chrono::NaiveDate),
    Timestamp(chrono::DateTime<chrono::Utc>),
    Null,
}

impl SqlValue {
    /// Whether this value is SQL NULL
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Render this value as inline SQL literal text
    pub fn to_sql(&self) -> String {
        crate::sql::to_sql_literal(self)
    }
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_sql())
    }
}

impl From<String> for SqlValue {
    fn from(val: String) -> Self {
        SqlValue::Text(val)
    }
}

impl From<&str> for SqlValue {
    fn from(val: &str) -> Self {
        SqlValue::Text(val.to_string())
    }
}

impl From<i16> for SqlValue {
    fn from(val: i16) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl From<i32> for SqlValue {
    fn from(val: i32) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(val: i64) -> Self {
        SqlValue::Integer(val)
    }
}

impl From<u32> for SqlValue {
    fn from(val: u32) -> Self {
        SqlValue::Integer(val as i64)
    }
}

impl From<u64> for SqlValue {
    fn from(val: u64) -> Self {
        // Values beyond i64 keep their digits as a decimal
        match i64::try_from(val) {
            Ok(v) => SqlValue::Integer(v),
            Err(_) => SqlValue::Decimal(val.to_string()),
        }
    }
}

impl From<f32> for SqlValue {
    fn from(val: f32) -> Self {
        SqlValue::Float(val as f64)
    }
}

impl From<f64> for SqlValue {
    fn from(val: f64) -> Self {
        SqlValue::Float(val)
    }
}

impl From<bool> for SqlValue {
    fn from(val: bool) -> Self {
        SqlValue::Boolean(val)
    }
}

impl From<Uuid> for SqlValue {
    fn from(val: Uuid) -> Self {
        SqlValue::Uuid(val)
    }
}

impl From<chrono::NaiveDate> for SqlValue {
    fn from(val: chrono::NaiveDate) -> Self {
        SqlValue::Date(val)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for SqlValue {
    fn from(val: chrono::DateTime<chrono::Utc>) -> Self {
        SqlValue::Timestamp(val)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => SqlValue::Null,
        }
    }
}
