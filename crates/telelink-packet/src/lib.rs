//! Fixed-width packet schemas and records for the telelink radio protocol.
//!
//! A packet kind is a [`PacketSchema`]: an ordered list of little-endian
//! primitive [`FieldType`]s. A [`Record`] pairs a schema with one typed
//! [`Value`] per field. The two kinds flown on the instrument are
//! [`Telemetry`] (instrument to ground) and [`Command`] (ground to
//! instrument), both thin views over a record.
//!
//! Framing, escaping and checksums live in `telelink-frame`.

pub mod command;
pub mod error;
pub mod field;
pub mod kind;
pub mod record;
pub mod schema;
pub mod telemetry;
pub mod traits;

pub use command::{
    Command, CommandRequest, CommandSpec, CommandTable, COMMAND_SCHEMA, FILLER_COUNT, FILLER_WORD,
};
pub use error::{CommandError, RecordError, Result};
pub use field::{FieldType, Value};
pub use kind::PacketKind;
pub use record::Record;
pub use schema::PacketSchema;
pub use telemetry::{Attitude, GpsFix, GpsSource, Telemetry, TelemetryField, TELEMETRY_SCHEMA};
pub use traits::Packet;
