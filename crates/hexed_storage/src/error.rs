//! Error types for storage operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error occurred in the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A strict operation addressed a byte outside `[0, len)`.
    #[error("offset {offset} out of range for store of length {len}")]
    OutOfRange {
        /// The requested offset.
        offset: u64,
        /// The store length at the time of the call.
        len: u64,
    },

    /// The store is too large to be materialized in memory.
    #[error("store of {len} bytes exceeds in-memory limit of {limit} bytes")]
    Oversize {
        /// The current store length.
        len: u64,
        /// The configured materialization limit.
        limit: u64,
    },

    /// Another store already holds the file.
    #[error("file is locked by another store: {}", path.display())]
    Locked {
        /// The file that could not be locked.
        path: PathBuf,
    },
}
