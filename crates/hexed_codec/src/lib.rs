//! # hexed codec
//!
//! Interprets raw byte selections as numbers, and converts between bytes
//! and the hex text a user types.
//!
//! All decoding is strict little-endian. A [`Selection`] is flattened by
//! concatenating its present rows; absent rows are skipped, never padded.
//!
//! ## Usage
//!
//! ```
//! use hexed_codec::{interpret, parse_hex_bytes, Selection};
//!
//! let bytes = parse_hex_bytes("EF BE AD DE").unwrap();
//! let values = interpret(&Selection::from(&bytes[..]));
//! for value in &values {
//!     println!("{value}");
//! }
//! assert_eq!(values.len(), 5);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod decoder;
mod error;
pub mod hex;
mod primitive;
mod selection;

pub use decoder::{interpret, PrimitiveDecoder};
pub use error::{CodecError, CodecResult};
pub use hex::{format_hex, parse_hex_bytes};
pub use primitive::{DecodedValue, Primitive};
pub use selection::Selection;
