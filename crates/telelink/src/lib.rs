//! Framed telemetry and command packets for balloon instrument radio links.
//!
//! # Crate Structure
//!
//! - [`packet`]: field types, schemas, records, and the telemetry and command packets
//! - [`frame`]: KISS-style framing with byte escaping and a 16-bit checksum
//!
//! ```
//! use telelink::frame::{decode_packet, encode_packet};
//! use telelink::packet::{Command, CommandTable};
//!
//! let table = CommandTable::standard();
//! let request = table.parse_line("CHANGE_TRANSMISSION_RATE 5").unwrap();
//! let command = Command::from_request(&table, &request).unwrap();
//!
//! let frame = encode_packet(&command);
//! let decoded: Command = decode_packet(&frame).unwrap();
//! assert_eq!(decoded.command_name(&table), Some("CHANGE_TRANSMISSION_RATE"));
//! assert_eq!(decoded.command_value(), 5);
//! ```

/// Re-export packet types.
pub mod packet {
    pub use telelink_packet::*;
}

/// Re-export frame types.
pub mod frame {
    pub use telelink_frame::*;
}
