use crate::field::FieldType;

/// The fixed, ordered field layout of one packet kind.
///
/// Schemas are built once from a static field table and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketSchema {
    name: &'static str,
    fields: &'static [FieldType],
}

impl PacketSchema {
    pub const fn new(name: &'static str, fields: &'static [FieldType]) -> Self {
        Self { name, fields }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn fields(&self) -> &'static [FieldType] {
        self.fields
    }

    /// Number of fields.
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Packed payload size: the sum of all field widths.
    ///
    /// Excludes the checksum and the framing bytes.
    pub const fn byte_width(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.fields.len() {
            total += self.fields[i].width();
            i += 1;
        }
        total
    }

    pub fn field(&self, index: usize) -> Option<FieldType> {
        self.fields.get(index).copied()
    }

    /// Byte offset of field `index` within the packed payload.
    pub fn offset_of(&self, index: usize) -> Option<usize> {
        if index >= self.fields.len() {
            return None;
        }
        Some(self.fields[..index].iter().map(|t| t.width()).sum())
    }
}
