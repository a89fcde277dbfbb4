//! Error types for hexed core.

use std::io;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in editing, search and inspection.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Byte store error.
    #[error("storage error: {0}")]
    Storage(#[from] hexed_storage::StorageError),

    /// Decoding or hex parsing error.
    #[error("codec error: {0}")]
    Codec(#[from] hexed_codec::CodecError),

    /// I/O error outside the store, e.g. spawning the search worker.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The search pattern has no bytes.
    #[error("malformed pattern: pattern must not be empty")]
    MalformedPattern,

    /// The search worker ended without delivering a result.
    #[error("search worker terminated before delivering a result")]
    SearchAborted,
}

impl CoreError {
    /// Returns `true` if this is an out-of-range store access.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            CoreError::Storage(hexed_storage::StorageError::OutOfRange { .. })
        )
    }
}
