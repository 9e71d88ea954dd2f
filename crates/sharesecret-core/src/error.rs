//! # Error Hierarchy
//!
//! Structured error types for the secret store, built with `thiserror`.
//!
//! [`BackendError`] is raised by the durable image itself. [`StoreError`]
//! is what callers of the store see: the normal negative result
//! ([`StoreError::NotFound`]) plus the failure kinds. Backend errors from a
//! reload pass through unchanged; a failed save after a decided mutation is
//! wrapped as [`StoreError::Persistence`].

use thiserror::Error;

/// Errors raised by a persistence backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The backing file could not be opened, read, created, or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file content is not a well-formed serialized image.
    #[error("malformed store image: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors returned by the secret store's `add` and `get` operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested digest is absent or has already been consumed.
    ///
    /// This is the only error expected in normal operation.
    #[error("secret {0} not found")]
    NotFound(String),

    /// Reloading the durable image failed.
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// A mutation was decided but the durable write could not complete.
    /// The in-memory image has been rolled back to the last persisted state.
    #[error("failed to persist store image: {0}")]
    Persistence(#[source] BackendError),
}

impl StoreError {
    /// Whether this error is the normal "absent or already read" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
