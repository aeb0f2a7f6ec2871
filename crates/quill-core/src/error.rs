//! Storage-level error types.

use thiserror::Error;

/// Failures surfaced by a post store backend.
///
/// A missing record is not an error here - lookups return `Option` and
/// deletes report whether anything matched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store connection failed: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Query(String),
}
