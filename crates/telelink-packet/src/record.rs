use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{RecordError, Result};
use crate::field::Value;
use crate::kind::PacketKind;
use crate::schema::PacketSchema;

/// One packet instance: a schema and one value per schema field.
///
/// The value sequence always has the schema's length and every value carries
/// its field's declared type. Constructors and setters enforce both.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    schema: PacketSchema,
    values: Vec<Value>,
}

impl Record {
    /// Create a record with every field at its zero value.
    pub fn new(schema: PacketSchema) -> Self {
        let values = schema.fields().iter().map(|t| t.default_value()).collect();
        Self { schema, values }
    }

    /// Create a record from a complete value sequence.
    pub fn from_values(schema: PacketSchema, values: Vec<Value>) -> Result<Self> {
        if values.len() != schema.len() {
            return Err(RecordError::ArityMismatch {
                schema: schema.name(),
                expected: schema.len(),
                actual: values.len(),
            });
        }
        for (index, (value, expected)) in values.iter().zip(schema.fields()).enumerate() {
            if value.field_type() != *expected {
                return Err(RecordError::TypeMismatch {
                    index,
                    expected: *expected,
                    actual: value.field_type(),
                });
            }
        }
        Ok(Self { schema, values })
    }

    /// Build from values already known to match `schema`.
    pub(crate) fn from_trusted(schema: PacketSchema, values: Vec<Value>) -> Self {
        debug_assert!(Self::from_values(schema, values.clone()).is_ok());
        Self { schema, values }
    }

    /// Read a fresh record from packed payload bytes, fields in schema order.
    ///
    /// Returns `None` if `src` runs out before the last field. Trailing bytes
    /// are left in `src`.
    pub fn unpack(schema: PacketSchema, src: &mut impl Buf) -> Option<Self> {
        let values = schema
            .fields()
            .iter()
            .map(|t| t.unpack(src))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { schema, values })
    }

    pub fn schema(&self) -> &PacketSchema {
        &self.schema
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).copied()
    }

    /// Replace the value of field `index`.
    ///
    /// The value must have the field's declared type.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        let expected = self
            .schema
            .field(index)
            .ok_or(RecordError::IndexOutOfRange {
                schema: self.schema.name(),
                index,
                len: self.schema.len(),
            })?;
        if value.field_type() != expected {
            return Err(RecordError::TypeMismatch {
                index,
                expected,
                actual: value.field_type(),
            });
        }
        self.values[index] = value;
        Ok(())
    }

    /// Logical kind from the discriminator in field 0.
    pub fn kind(&self) -> PacketKind {
        match self.values.first() {
            Some(Value::Byte(b)) => PacketKind::from_byte(*b),
            _ => PacketKind::Unknown,
        }
    }

    /// Packed payload size in bytes.
    pub fn byte_width(&self) -> usize {
        self.schema.byte_width()
    }

    /// Append the packed payload to `dst`.
    pub fn pack(&self, dst: &mut impl BufMut) {
        for value in &self.values {
            value.pack(dst);
        }
    }

    /// The packed payload as a new buffer.
    pub fn to_bytes(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.byte_width());
        self.pack(&mut buf);
        buf.freeze()
    }

    /// Lowercase hex of the packed payload.
    pub fn hex_string(&self) -> String {
        self.to_bytes().iter().map(|b| format!("{b:02x}")).collect()
    }
}
