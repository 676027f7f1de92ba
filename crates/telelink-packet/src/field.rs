//! Primitive wire types.
//!
//! Every field is fixed width and little-endian. Signed integers use two's
//! complement, `Float32` is IEEE-754 binary32 and `Bool` is a single 0/1 byte.

use bytes::{Buf, BufMut};

/// A primitive field type on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
}

impl FieldType {
    /// Encoded width in bytes.
    pub const fn width(self) -> usize {
        match self {
            FieldType::Bool | FieldType::Byte => 1,
            FieldType::Int16 | FieldType::UInt16 => 2,
            FieldType::Int32 | FieldType::UInt32 | FieldType::Float32 => 4,
        }
    }

    /// The zero value a fresh record holds for this type.
    pub const fn default_value(self) -> Value {
        match self {
            FieldType::Bool => Value::Bool(false),
            FieldType::Byte => Value::Byte(0),
            FieldType::Int16 => Value::Int16(0),
            FieldType::UInt16 => Value::UInt16(0),
            FieldType::Int32 => Value::Int32(0),
            FieldType::UInt32 => Value::UInt32(0),
            FieldType::Float32 => Value::Float32(0.0),
        }
    }

    /// Lowercase name used in diagnostics and CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            FieldType::Bool => "bool",
            FieldType::Byte => "u8",
            FieldType::Int16 => "i16",
            FieldType::UInt16 => "u16",
            FieldType::Int32 => "i32",
            FieldType::UInt32 => "u32",
            FieldType::Float32 => "f32",
        }
    }

    /// Read one value of this type from `src`.
    ///
    /// Returns `None` if fewer than [`width`](Self::width) bytes remain.
    /// Any nonzero byte reads as `true` for `Bool`.
    pub fn unpack(self, src: &mut impl Buf) -> Option<Value> {
        if src.remaining() < self.width() {
            return None;
        }
        let value = match self {
            FieldType::Bool => Value::Bool(src.get_u8() != 0),
            FieldType::Byte => Value::Byte(src.get_u8()),
            FieldType::Int16 => Value::Int16(src.get_i16_le()),
            FieldType::UInt16 => Value::UInt16(src.get_u16_le()),
            FieldType::Int32 => Value::Int32(src.get_i32_le()),
            FieldType::UInt32 => Value::UInt32(src.get_u32_le()),
            FieldType::Float32 => Value::Float32(src.get_f32_le()),
        };
        Some(value)
    }
}

/// A single field value, tagged with its wire type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Bool(bool),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Float32(f32),
}

impl Value {
    /// The wire type this value encodes as.
    pub const fn field_type(&self) -> FieldType {
        match self {
            Value::Bool(_) => FieldType::Bool,
            Value::Byte(_) => FieldType::Byte,
            Value::Int16(_) => FieldType::Int16,
            Value::UInt16(_) => FieldType::UInt16,
            Value::Int32(_) => FieldType::Int32,
            Value::UInt32(_) => FieldType::UInt32,
            Value::Float32(_) => FieldType::Float32,
        }
    }

    /// Append the little-endian encoding of this value to `dst`.
    pub fn pack(&self, dst: &mut impl BufMut) {
        match *self {
            Value::Bool(v) => dst.put_u8(u8::from(v)),
            Value::Byte(v) => dst.put_u8(v),
            Value::Int16(v) => dst.put_i16_le(v),
            Value::UInt16(v) => dst.put_u16_le(v),
            Value::Int32(v) => dst.put_i32_le(v),
            Value::UInt32(v) => dst.put_u32_le(v),
            Value::Float32(v) => dst.put_f32_le(v),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> Option<u8> {
        match *self {
            Value::Byte(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i16(&self) -> Option<i16> {
        match *self {
            Value::Int16(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> Option<u16> {
        match *self {
            Value::UInt16(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match *self {
            Value::Int32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        match *self {
            Value::UInt32(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match *self {
            Value::Float32(v) => Some(v),
            _ => None,
        }
    }

    /// Widen any variant to `f64` for display and unit conversion.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Value::Bool(v) => f64::from(u8::from(v)),
            Value::Byte(v) => f64::from(v),
            Value::Int16(v) => f64::from(v),
            Value::UInt16(v) => f64::from(v),
            Value::Int32(v) => f64::from(v),
            Value::UInt32(v) => f64::from(v),
            Value::Float32(v) => f64::from(v),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::Byte(v) => write!(f, "{v}"),
            Value::Int16(v) => write!(f, "{v}"),
            Value::UInt16(v) => write!(f, "{v}"),
            Value::Int32(v) => write!(f, "{v}"),
            Value::UInt32(v) => write!(f, "{v}"),
            Value::Float32(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    u8 => Byte,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    f32 => Float32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    const ALL: [FieldType; 7] = [
        FieldType::Bool,
        FieldType::Byte,
        FieldType::Int16,
        FieldType::UInt16,
        FieldType::Int32,
        FieldType::UInt32,
        FieldType::Float32,
    ];

    #[test]
    fn widths_match_wire_table() {
        let widths: Vec<usize> = ALL.iter().map(|t| t.width()).collect();
        assert_eq!(widths, vec![1, 1, 2, 2, 4, 4, 4]);
    }

    #[test]
    fn default_value_has_declared_type() {
        for ty in ALL {
            assert_eq!(ty.default_value().field_type(), ty);
        }
    }

    #[test]
    fn packs_little_endian() {
        let mut buf = BytesMut::new();
        Value::UInt16(0x1234).pack(&mut buf);
        Value::Int32(-2).pack(&mut buf);
        Value::Bool(true).pack(&mut buf);
        assert_eq!(
            buf.as_ref(),
            &[0x34, 0x12, 0xFE, 0xFF, 0xFF, 0xFF, 0x01]
        );
    }

    #[test]
    fn float_is_ieee754_binary32() {
        let mut buf = BytesMut::new();
        Value::Float32(1.0).pack(&mut buf);
        assert_eq!(buf.as_ref(), &[0x00, 0x00, 0x80, 0x3F]);
    }

    #[test]
    fn unpack_reads_each_type_back() {
        let values = [
            Value::Bool(true),
            Value::Byte(0xAB),
            Value::Int16(-1234),
            Value::UInt16(54321),
            Value::Int32(-123_456_789),
            Value::UInt32(0xDEAD_BEEF),
            Value::Float32(-123.5),
        ];
        let mut buf = BytesMut::new();
        for value in &values {
            value.pack(&mut buf);
        }

        let mut src = buf.freeze();
        for value in &values {
            let read = value.field_type().unpack(&mut src).unwrap();
            assert_eq!(read, *value);
        }
        assert!(src.is_empty());
    }

    #[test]
    fn nonzero_byte_unpacks_as_true() {
        let mut src: &[u8] = &[0x07];
        assert_eq!(FieldType::Bool.unpack(&mut src), Some(Value::Bool(true)));
    }

    #[test]
    fn unpack_short_buffer_returns_none() {
        let mut src: &[u8] = &[0x01, 0x02, 0x03];
        assert_eq!(FieldType::UInt32.unpack(&mut src), None);
    }

    #[test]
    fn from_primitive_picks_matching_variant() {
        assert_eq!(Value::from(7u8).field_type(), FieldType::Byte);
        assert_eq!(Value::from(7i16).field_type(), FieldType::Int16);
        assert_eq!(Value::from(7.5f32).field_type(), FieldType::Float32);
        assert_eq!(Value::from(false).field_type(), FieldType::Bool);
    }
}
