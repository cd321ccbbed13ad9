//! # Store Errors

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
///
/// The store is deliberately narrow: list, insert, and delete cannot
/// fail, so the only error condition is a replace against an identifier
/// that is not present.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record exists under the referenced identifier
    #[error("Card not found")]
    NotFound,
}
