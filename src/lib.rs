//! # sqlweave
//!
//! An object-model SQL query builder: tables, columns, criteria and ordering
//! are typed values, and [`SelectQuery`](query_object::SelectQuery) renders
//! them into a well-formed SELECT statement.
//!
//! ## Quick Start
//!
//! ```rust
//! use sqlweave::prelude::*;
//!
//! fn main() -> Result<(), SqlWeaveError> {
//!     let employees = Table::with_alias("people", "employees")?;
//!     let managers = Table::with_alias("people", "managers")?;
//!
//!     let mut select = SelectQuery::new();
//!     select.add_column_as(&employees, "lastname", "employee")?;
//!     select.add_column_as(&managers, "lastname", "manager")?;
//!     select.add_join(&employees, "managerID", &managers, "id")?;
//!     select.set_limit(10);
//!
//!     let weave = SqlWeave::default();
//!     println!("{}", weave.render(&select));
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::SqlWeave;
pub use crate::errors::SqlWeaveError;

// Re-export centralized config
pub use config::{AppConfig, LineEnding, RenderConfig};

// Re-export internal crates
pub use query_object;
pub use sql_literal;

// Re-export external dependencies used in public API
pub use serde_json;
