//! Convenience re-exports for common query-object usage

// Model
pub use crate::column::{Column, Projection};
pub use crate::table::Table;

// Query assembly
pub use crate::select_query::{
    ComparisonOperator, Criteria, Operand, Order, SelectQuery, SortOrder,
};

// Rendering
pub use crate::output::{IndentedWriter, SqlOutput};
pub use crate::traits::{QueryElement, Render};

// Error types
pub use crate::errors::QueryError;
pub use crate::validation::ValidationError;

// Literal values
pub use sql_literal::SqlValue;
