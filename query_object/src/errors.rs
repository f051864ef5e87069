use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum QueryError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
