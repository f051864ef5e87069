//! Serialization utilities
//!
//! This module provides conversion from serde data
//! to literal values.

use crate::types::SqlValue;
use serde::Serialize;
use serde_json::Value;

/// Convert a JSON value into a literal value
pub fn from_json(value: Value) -> SqlValue {
    match value {
        // Strings stay text verbatim; timestamps come in as `DateTime<Utc>`
        Value::String(s) => SqlValue::Text(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                SqlValue::Integer(i)
            } else if let Some(u) = n.as_u64() {
                SqlValue::from(u)
            } else if let Some(f) = n.as_f64() {
                SqlValue::Float(f)
            } else {
                SqlValue::Decimal(n.to_string())
            }
        }
        Value::Bool(b) => SqlValue::Boolean(b),
        Value::Null => SqlValue::Null,
        other => SqlValue::Text(other.to_string()),
    }
}

/// Serialize data and convert every element of the result into literal values.
///
/// A sequence yields one value per element, any other shape yields a single value.
pub fn serialize_to_sql_values<T: Serialize>(
    data: &T,
) -> Result<Vec<SqlValue>, serde_json::Error> {
    let values = match serde_json::to_value(data)? {
        Value::Array(items) => items.into_iter().map(from_json).collect(),
        other => vec![from_json(other)],
    };
    Ok(values)
}
