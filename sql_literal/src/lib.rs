//! Inline SQL literal rendering
//! This crate turns runtime values into the literal text embedded in generated queries

pub mod serialize;
pub mod sql;
pub mod types;

pub use serialize::{from_json, serialize_to_sql_values};
pub use sql::{is_plain_number, quote_text, to_sql_literal};
pub use types::SqlValue;
