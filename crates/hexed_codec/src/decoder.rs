//! Little-endian primitive decoder.

use crate::error::{CodecError, CodecResult};
use crate::primitive::{DecodedValue, Primitive};
use crate::selection::Selection;
use bytes::Buf;

/// Decodes a flattened selection as fixed-width little-endian primitives.
///
/// Every decode reads from the front of the flattened bytes and consumes
/// exactly the primitive's width; trailing bytes are ignored. A selection
/// shorter than the width fails with [`CodecError::Underflow`] rather than
/// being padded.
///
/// # Example
///
/// ```
/// use hexed_codec::{PrimitiveDecoder, Selection};
///
/// let selection = Selection::from(vec![vec![0xEF, 0xBE], vec![0xAD, 0xDE]]);
/// let decoder = PrimitiveDecoder::new(&selection);
/// assert_eq!(decoder.decode_u32().unwrap(), 0xDEAD_BEEF);
/// ```
#[derive(Debug, Clone)]
pub struct PrimitiveDecoder {
    data: Vec<u8>,
}

impl PrimitiveDecoder {
    /// Flattens `selection` and prepares it for decoding.
    #[must_use]
    pub fn new(selection: &Selection) -> Self {
        Self {
            data: selection.flatten(),
        }
    }

    /// Uses already contiguous bytes.
    #[must_use]
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Number of flattened bytes available.
    #[must_use]
    pub fn available(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if `primitive` fits in the available bytes.
    #[must_use]
    pub fn fits(&self, primitive: Primitive) -> bool {
        self.data.len() >= primitive.width()
    }

    #[inline]
    fn front(&self, primitive: Primitive) -> CodecResult<&[u8]> {
        let needed = primitive.width();
        if self.data.len() < needed {
            return Err(CodecError::Underflow {
                primitive,
                needed,
                available: self.data.len(),
            });
        }
        Ok(&self.data[..needed])
    }

    /// Signed 16-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 2 bytes.
    pub fn decode_i16(&self) -> CodecResult<i16> {
        Ok(self.front(Primitive::Int16)?.get_i16_le())
    }

    /// Unsigned 16-bit integer: the same bit pattern as [`Self::decode_i16`].
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 2 bytes.
    pub fn decode_u16(&self) -> CodecResult<u16> {
        Ok(self.front(Primitive::UInt16)?.get_u16_le())
    }

    /// Signed 32-bit integer, two's complement.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 4 bytes.
    pub fn decode_i32(&self) -> CodecResult<i32> {
        Ok(self.front(Primitive::Int32)?.get_i32_le())
    }

    /// Unsigned 32-bit integer, masked into a `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 4 bytes.
    pub fn decode_u32(&self) -> CodecResult<u64> {
        let bits = self.front(Primitive::UInt32)?.get_i32_le();
        Ok(i64::from(bits) as u64 & 0xFFFF_FFFF)
    }

    /// Signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 8 bytes.
    pub fn decode_i64(&self) -> CodecResult<i64> {
        Ok(self.front(Primitive::Int64)?.get_i64_le())
    }

    /// IEEE-754 single precision.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 4 bytes.
    pub fn decode_f32(&self) -> CodecResult<f32> {
        Ok(self.front(Primitive::Float32)?.get_f32_le())
    }

    /// IEEE-754 double precision.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] with fewer than 8 bytes.
    pub fn decode_f64(&self) -> CodecResult<f64> {
        Ok(self.front(Primitive::Float64)?.get_f64_le())
    }

    /// Decodes one primitive, tagged.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Underflow`] if the primitive doesn't fit.
    pub fn decode(&self, primitive: Primitive) -> CodecResult<DecodedValue> {
        Ok(match primitive {
            Primitive::Int16 => DecodedValue::Int16(self.decode_i16()?),
            Primitive::UInt16 => DecodedValue::UInt16(self.decode_u16()?),
            Primitive::Int32 => DecodedValue::Int32(self.decode_i32()?),
            Primitive::UInt32 => DecodedValue::UInt32(self.decode_u32()?),
            Primitive::Int64 => DecodedValue::Int64(self.decode_i64()?),
            Primitive::Float32 => DecodedValue::Float32(self.decode_f32()?),
            Primitive::Float64 => DecodedValue::Float64(self.decode_f64()?),
        })
    }

    /// Decodes every primitive that fits, in [`Primitive::ALL`] order.
    #[must_use]
    pub fn interpret(&self) -> Vec<DecodedValue> {
        Primitive::ALL
            .iter()
            .filter_map(|&primitive| self.decode(primitive).ok())
            .collect()
    }
}

/// Decodes every primitive that fits in `selection`.
#[must_use]
pub fn interpret(selection: &Selection) -> Vec<DecodedValue> {
    PrimitiveDecoder::new(selection).interpret()
}
