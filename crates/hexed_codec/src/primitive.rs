//! Fixed-width primitive kinds and decoded values.

use serde::Serialize;
use std::fmt;

/// A fixed-width numeric primitive that a selection can be read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    /// Signed 16-bit integer.
    Int16,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Signed 32-bit integer.
    Int32,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Signed 64-bit integer.
    Int64,
    /// IEEE-754 single precision.
    Float32,
    /// IEEE-754 double precision.
    Float64,
}

impl Primitive {
    /// All primitives, in display order.
    pub const ALL: [Primitive; 7] = [
        Primitive::Int16,
        Primitive::UInt16,
        Primitive::Int32,
        Primitive::UInt32,
        Primitive::Float32,
        Primitive::Int64,
        Primitive::Float64,
    ];

    /// Number of bytes consumed by a decode.
    #[must_use]
    pub const fn width(self) -> usize {
        match self {
            Primitive::Int16 | Primitive::UInt16 => 2,
            Primitive::Int32 | Primitive::UInt32 | Primitive::Float32 => 4,
            Primitive::Int64 | Primitive::Float64 => 8,
        }
    }

    /// Short label used in status output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Primitive::Int16 => "int16",
            Primitive::UInt16 => "uint16",
            Primitive::Int32 => "int32",
            Primitive::UInt32 => "uint32",
            Primitive::Int64 => "int64",
            Primitive::Float32 => "float32",
            Primitive::Float64 => "float64",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value decoded from a selection, tagged with its primitive.
///
/// The unsigned 32-bit variant is carried in a `u64`, the masked widening of
/// the same bit pattern the signed variant reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DecodedValue {
    /// Signed 16-bit integer.
    Int16(i16),
    /// Unsigned 16-bit integer.
    UInt16(u16),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer, widened.
    UInt32(u64),
    /// Signed 64-bit integer.
    Int64(i64),
    /// IEEE-754 single precision.
    Float32(f32),
    /// IEEE-754 double precision.
    Float64(f64),
}

impl DecodedValue {
    /// The primitive this value was decoded as.
    #[must_use]
    pub const fn primitive(&self) -> Primitive {
        match self {
            DecodedValue::Int16(_) => Primitive::Int16,
            DecodedValue::UInt16(_) => Primitive::UInt16,
            DecodedValue::Int32(_) => Primitive::Int32,
            DecodedValue::UInt32(_) => Primitive::UInt32,
            DecodedValue::Int64(_) => Primitive::Int64,
            DecodedValue::Float32(_) => Primitive::Float32,
            DecodedValue::Float64(_) => Primitive::Float64,
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.primitive().name();
        match self {
            DecodedValue::Int16(v) => write!(f, "{name}: {v}"),
            DecodedValue::UInt16(v) => write!(f, "{name}: {v}"),
            DecodedValue::Int32(v) => write!(f, "{name}: {v}"),
            DecodedValue::UInt32(v) => write!(f, "{name}: {v}"),
            DecodedValue::Int64(v) => write!(f, "{name}: {v}"),
            DecodedValue::Float32(v) => write!(f, "{name}: {v:.6}"),
            DecodedValue::Float64(v) => write!(f, "{name}: {v:.16E}"),
        }
    }
}
