//! Convenience re-exports for common sqlweave usage
//!
//! This prelude module re-exports the most commonly used items,
//! making it easier to import everything you need with a single use statement.
//!
//! # Example
//!
//! ```rust
//! use sqlweave::prelude::*;
//!
//! // Now you have access to tables, criteria, the query assembler and SqlWeave
//! ```

// Core sqlweave components
pub use crate::core::SqlWeave;
pub use crate::errors::SqlWeaveError;

// Re-export centralized config
pub use config::{AppConfig, LineEnding, RenderConfig};

// Re-export commonly used query-object types for convenience
pub use query_object::prelude::*;

// Common external dependencies
pub use serde_json::json;
