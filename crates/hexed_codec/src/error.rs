//! Error types for the codec crate.

use crate::primitive::Primitive;
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while decoding selections or parsing hex text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The flattened selection is shorter than the primitive's width.
    #[error("{primitive} needs {needed} bytes, selection has {available}")]
    Underflow {
        /// The primitive that was requested.
        primitive: Primitive,
        /// Bytes required by the primitive.
        needed: usize,
        /// Bytes available after flattening.
        available: usize,
    },

    /// A token is not a one- or two-digit hex byte.
    #[error("invalid hex byte: {token:?}")]
    InvalidHex {
        /// The offending token.
        token: String,
    },
}

impl CodecError {
    /// Create an invalid hex error.
    pub fn invalid_hex(token: impl Into<String>) -> Self {
        Self::InvalidHex {
            token: token.into(),
        }
    }
}
