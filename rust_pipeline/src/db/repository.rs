//! Warehouse trait and error types.

use crate::core::domain::Transaction;

/// Result type for warehouse operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for warehouse operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Query error: {0}")]
    QueryError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A destination table for the enriched record set.
///
/// `replace_all` is the only write path: it removes whatever the warehouse
/// currently holds and stores the given records, returning the number of rows
/// written. Failures surface to the caller with no retry.
pub trait CustomerWarehouse {
    fn replace_all(&mut self, records: &[Transaction]) -> RepositoryResult<usize>;
}
