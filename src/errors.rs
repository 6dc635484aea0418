//! Library errors

use thiserror::Error;

/// Errors surfaced by tree operations.
///
/// The only recoverable condition is a lookup target that is absent from the
/// tree; building from an empty collection is valid and yields an empty tree.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("value not found in tree")]
    NotFound,
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
