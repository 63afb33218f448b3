//! Error types for container operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything a container operation can fail with.
///
/// Every variant is raised before any mutation happens, so a container that
/// returned an error is in the same state it was before the call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Requested capacity was zero. No container is produced.
    #[error("capacity must be at least 1, got {capacity}")]
    InvalidConfiguration {
        /// The rejected capacity.
        capacity: usize,
    },

    /// An absent element was offered for insertion.
    #[error("absent elements cannot be inserted")]
    InvalidInput,

    /// Peek or remove on a container holding no elements.
    #[error("container is empty")]
    EmptyContainer,

    /// A traversal was asked for an element after it was exhausted.
    #[error("no next element")]
    NoNextElement,
}

/// Validates a requested capacity.
pub(crate) fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        tracing::trace!(capacity, "rejected container capacity");
        return Err(Error::InvalidConfiguration { capacity });
    }
    Ok(capacity)
}
