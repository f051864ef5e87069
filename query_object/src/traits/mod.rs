//! Traits shared by every element of a query
//!
//! Rendering and referenced-table discovery are the two capabilities the
//! query assembler relies on when walking its heterogeneous collections.

pub mod query_element;

pub use query_element::{QueryElement, Render, TableSet};
