//! Query Object - the SQL object model for sqlweave
//!
//! This crate provides tables, columns, criteria and ordering as typed values,
//! and the [`SelectQuery`] assembler that renders them into a SELECT statement.

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        $crate::tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod column;
pub mod errors;
pub mod output;
pub mod prelude;
pub mod select_query;
pub mod table;
pub mod traits;
pub mod validation;

pub use column::{Column, Projection};
pub use errors::QueryError;
pub use output::{IndentedWriter, SqlOutput};
pub use select_query::{
    ComparisonOperator, Criteria, LogicalOperator, Operand, Order, Pagination, SelectQuery,
    SortOrder,
};
pub use table::Table;
pub use traits::{QueryElement, Render, TableSet};
pub use validation::{ValidatedIdentifier, ValidatedTableName, ValidationError};

#[doc(hidden)]
pub use tracing;
