//! Error types for the sqlweave crate
//!
//! This module contains all error types that can be returned by sqlweave operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SqlWeaveError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Query error: {0}")]
    Query(#[from] query_object::QueryError),

    #[error("Validation error: {0}")]
    Validation(#[from] query_object::ValidationError),

    #[error("Query not found: {0}")]
    QueryNotFound(String),

    #[error("Query already registered: {0}")]
    QueryAlreadyRegistered(String),
}
