//! SELECT query assembly
//!
//! This module provides the query assembler and the criteria, ordering and
//! pagination pieces it renders.

pub mod builder;
pub mod filter;
pub mod ordering;
pub mod pagination;
pub mod sql_generation;


#[cfg(test)]
mod integration_tests;

pub use builder::SelectQuery;
pub use filter::{ComparisonOperator, Criteria, CustomOperator, LogicalOperator, Operand};
pub use ordering::{Order, SortOrder};
pub use pagination::Pagination;
pub use sql_generation::SqlGenerator;
