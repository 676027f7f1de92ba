//! Packet discriminators.
//!
//! The first field of every record identifies its logical kind. The value is
//! carried as a single unsigned byte, so `Unknown` never appears on the wire;
//! it is what any unrecognized discriminator reads as.

/// Logical packet kind carried in field 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketKind {
    Unknown,
    Data,
    Command,
    Ack,
}

impl PacketKind {
    /// Numeric discriminator (`Unknown` is -1).
    pub const fn code(self) -> i8 {
        match self {
            PacketKind::Unknown => -1,
            PacketKind::Data => 0,
            PacketKind::Command => 1,
            PacketKind::Ack => 2,
        }
    }

    /// Wire byte for this kind, or `None` for `Unknown`.
    pub const fn to_byte(self) -> Option<u8> {
        match self {
            PacketKind::Unknown => None,
            PacketKind::Data => Some(0),
            PacketKind::Command => Some(1),
            PacketKind::Ack => Some(2),
        }
    }

    pub const fn from_byte(byte: u8) -> Self {
        match byte {
            0 => PacketKind::Data,
            1 => PacketKind::Command,
            2 => PacketKind::Ack,
            _ => PacketKind::Unknown,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            PacketKind::Unknown => "UNKNOWN",
            PacketKind::Data => "DATA",
            PacketKind::Command => "COMMAND",
            PacketKind::Ack => "ACK",
        }
    }
}

impl std::fmt::Display for PacketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
