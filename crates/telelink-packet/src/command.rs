//! Command packets sent up to the instrument.
//!
//! Field layout (26 payload bytes):
//! ```text
//! packet type (u8) | command index (u8) | command value (u32) | filler × 5 (u32)
//! ```
//! The five filler words always carry `0x12345678`. The flight firmware
//! expects them byte-for-byte.

use crate::error::{CommandError, RecordError, Result};
use crate::field::{FieldType, Value};
use crate::record::Record;
use crate::schema::PacketSchema;
use crate::traits::Packet;

/// Constant carried in every filler word.
pub const FILLER_WORD: u32 = 0x1234_5678;

/// Number of filler words after the command value.
pub const FILLER_COUNT: usize = 5;

const PACKET_TYPE: u8 = 1;
const INDEX_FIELD: usize = 1;
const VALUE_FIELD: usize = 2;
const FILLER_START: usize = 3;

const FIELDS: [FieldType; 8] = [
    FieldType::Byte,
    FieldType::Byte,
    FieldType::UInt32,
    FieldType::UInt32,
    FieldType::UInt32,
    FieldType::UInt32,
    FieldType::UInt32,
    FieldType::UInt32,
];

/// Command packet schema.
pub const COMMAND_SCHEMA: PacketSchema = PacketSchema::new("command", &FIELDS);

/// One named command the instrument understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub index: u8,
    /// What the numeric argument means, if the command takes one.
    pub argument: Option<&'static str>,
}

const STANDARD_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "",
        index: 0,
        argument: None,
    },
    CommandSpec {
        name: "RADIO_TEST",
        index: 1,
        argument: None,
    },
    CommandSpec {
        name: "SWITCH_RELAYS",
        index: 3,
        argument: Some("relay index"),
    },
    CommandSpec {
        name: "RESET",
        index: 5,
        argument: None,
    },
    CommandSpec {
        name: "CHANGE_TRANSMISSION_RATE",
        index: 7,
        argument: Some("transmission rate"),
    },
    CommandSpec {
        name: "CUTDOWN",
        index: 9,
        argument: None,
    },
];

/// Immutable mapping from command names to wire indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTable {
    commands: &'static [CommandSpec],
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl CommandTable {
    pub const fn new(commands: &'static [CommandSpec]) -> Self {
        Self { commands }
    }

    /// The command set flown on the current instrument.
    ///
    /// The empty name maps to index 0 (no operation).
    pub const fn standard() -> Self {
        Self::new(STANDARD_COMMANDS)
    }

    pub fn get(&self, name: &str) -> Option<&'static CommandSpec> {
        self.commands.iter().find(|spec| spec.name == name)
    }

    pub fn index_of(&self, name: &str) -> Option<u8> {
        self.get(name).map(|spec| spec.index)
    }

    pub fn name_of(&self, index: u8) -> Option<&'static str> {
        self.commands
            .iter()
            .find(|spec| spec.index == index)
            .map(|spec| spec.name)
    }

    /// Operator-visible commands (excludes the empty no-op entry).
    pub fn commands(&self) -> impl Iterator<Item = &'static CommandSpec> {
        self.commands.iter().filter(|spec| !spec.name.is_empty())
    }

    /// Validate an operator command line such as `CHANGE_TRANSMISSION_RATE 5`.
    ///
    /// Commands that take an argument require an unsigned integer after the
    /// name; commands that do not take one get value 0. Extra words are
    /// ignored.
    pub fn parse_line(&self, line: &str) -> std::result::Result<CommandRequest, CommandError> {
        let mut parts = line.split_whitespace();
        let name = parts.next().ok_or(CommandError::Empty)?;
        let spec = self
            .commands()
            .find(|spec| spec.name == name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        let value = match spec.argument {
            None => 0,
            Some(what) => {
                let raw = parts.next().ok_or(CommandError::MissingArgument {
                    command: spec.name,
                    what,
                })?;
                raw.parse::<u32>()
                    .map_err(|_| CommandError::InvalidArgument {
                        command: spec.name,
                        what,
                        value: raw.to_string(),
                    })?
            }
        };

        Ok(CommandRequest {
            name: spec.name,
            value,
        })
    }
}

/// A validated command name and value, ready to encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandRequest {
    pub name: &'static str,
    pub value: u32,
}

/// A command packet.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    record: Record,
}

impl Command {
    /// Build a command packet, resolving `name` through `table`.
    pub fn new(
        table: &CommandTable,
        name: &str,
        value: u32,
    ) -> std::result::Result<Self, CommandError> {
        let index = table
            .index_of(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        Ok(Self::from_index(index, value))
    }

    pub fn from_request(
        table: &CommandTable,
        request: &CommandRequest,
    ) -> std::result::Result<Self, CommandError> {
        Self::new(table, request.name, request.value)
    }

    /// Build a command packet from a raw command index.
    pub fn from_index(index: u8, value: u32) -> Self {
        let mut values = vec![
            Value::Byte(PACKET_TYPE),
            Value::Byte(index),
            Value::UInt32(value),
        ];
        values.extend([Value::UInt32(FILLER_WORD); FILLER_COUNT]);
        Self {
            record: Record::from_trusted(COMMAND_SCHEMA, values),
        }
    }

    pub fn command_index(&self) -> u8 {
        self.record
            .get(INDEX_FIELD)
            .and_then(|v| v.as_u8())
            .unwrap_or_default()
    }

    pub fn command_value(&self) -> u32 {
        self.record
            .get(VALUE_FIELD)
            .and_then(|v| v.as_u32())
            .unwrap_or_default()
    }

    /// Command name according to `table`, if the index is known.
    pub fn command_name(&self, table: &CommandTable) -> Option<&'static str> {
        table.name_of(self.command_index())
    }

    pub fn filler(&self) -> [u32; FILLER_COUNT] {
        std::array::from_fn(|i| {
            self.record
                .get(FILLER_START + i)
                .and_then(|v| v.as_u32())
                .unwrap_or_default()
        })
    }
}

impl Packet for Command {
    fn schema() -> PacketSchema {
        COMMAND_SCHEMA
    }

    fn from_record(record: Record) -> Result<Self> {
        if *record.schema() != COMMAND_SCHEMA {
            return Err(RecordError::SchemaMismatch {
                expected: COMMAND_SCHEMA.name(),
                actual: record.schema().name(),
            });
        }
        Ok(Self { record })
    }

    fn record(&self) -> &Record {
        &self.record
    }

    fn into_record(self) -> Record {
        self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::PacketKind;

    #[test]
    fn discriminator_is_command_kind() {
        assert_eq!(PacketKind::from_byte(PACKET_TYPE), PacketKind::Command);
    }

    #[test]
    fn schema_width() {
        assert_eq!(COMMAND_SCHEMA.len(), 8);
        assert_eq!(COMMAND_SCHEMA.byte_width(), 26);
    }

    #[test]
    fn standard_table_indices() {
        let table = CommandTable::standard();
        assert_eq!(table.index_of(""), Some(0));
        assert_eq!(table.index_of("RADIO_TEST"), Some(1));
        assert_eq!(table.index_of("SWITCH_RELAYS"), Some(3));
        assert_eq!(table.index_of("RESET"), Some(5));
        assert_eq!(table.index_of("CHANGE_TRANSMISSION_RATE"), Some(7));
        assert_eq!(table.index_of("CUTDOWN"), Some(9));
        assert_eq!(table.index_of("LAUNCH"), None);
        assert_eq!(table.name_of(9), Some("CUTDOWN"));
        assert_eq!(table.commands().count(), 5);
    }

    #[test]
    fn new_command_fills_layout() {
        let table = CommandTable::standard();
        let cmd = Command::new(&table, "CHANGE_TRANSMISSION_RATE", 30).unwrap();

        assert_eq!(cmd.record().kind(), PacketKind::Command);
        assert_eq!(cmd.command_index(), 7);
        assert_eq!(cmd.command_value(), 30);
        assert_eq!(cmd.filler(), [FILLER_WORD; FILLER_COUNT]);
        assert_eq!(cmd.command_name(&table), Some("CHANGE_TRANSMISSION_RATE"));
    }

    #[test]
    fn payload_bytes_are_exact() {
        let cmd = Command::new(&CommandTable::standard(), "CUTDOWN", 0).unwrap();
        let bytes = cmd.record().to_bytes();
        let mut expected = vec![0x01, 0x09, 0x00, 0x00, 0x00, 0x00];
        for _ in 0..FILLER_COUNT {
            expected.extend_from_slice(&[0x78, 0x56, 0x34, 0x12]);
        }
        assert_eq!(bytes.as_ref(), expected.as_slice());
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = Command::new(&CommandTable::standard(), "LAUNCH", 0).unwrap_err();
        assert_eq!(err, CommandError::UnknownCommand("LAUNCH".to_string()));
    }

    #[test]
    fn custom_table_is_honored() {
        const CUSTOM: &[CommandSpec] = &[CommandSpec {
            name: "PING",
            index: 42,
            argument: None,
        }];
        let table = CommandTable::new(CUSTOM);
        let cmd = Command::new(&table, "PING", 0).unwrap();
        assert_eq!(cmd.command_index(), 42);
        assert!(Command::new(&table, "CUTDOWN", 0).is_err());
    }

    #[test]
    fn parse_line_without_argument() {
        let table = CommandTable::standard();
        let req = table.parse_line("CUTDOWN").unwrap();
        assert_eq!(
            req,
            CommandRequest {
                name: "CUTDOWN",
                value: 0
            }
        );
        assert_eq!(table.parse_line("  RESET  extra").unwrap().value, 0);
    }

    #[test]
    fn parse_line_with_argument() {
        let table = CommandTable::standard();
        let req = table.parse_line("CHANGE_TRANSMISSION_RATE 15").unwrap();
        assert_eq!(req.name, "CHANGE_TRANSMISSION_RATE");
        assert_eq!(req.value, 15);

        let cmd = Command::from_request(&table, &req).unwrap();
        assert_eq!(cmd.command_index(), 7);
        assert_eq!(cmd.command_value(), 15);
    }

    #[test]
    fn parse_line_errors() {
        let table = CommandTable::standard();
        assert_eq!(table.parse_line("   "), Err(CommandError::Empty));
        assert!(matches!(
            table.parse_line("LAUNCH"),
            Err(CommandError::UnknownCommand(_))
        ));
        assert!(matches!(
            table.parse_line("SWITCH_RELAYS"),
            Err(CommandError::MissingArgument {
                command: "SWITCH_RELAYS",
                ..
            })
        ));
        assert!(matches!(
            table.parse_line("SWITCH_RELAYS two"),
            Err(CommandError::InvalidArgument { .. })
        ));
        assert!(matches!(
            table.parse_line("CHANGE_TRANSMISSION_RATE -1"),
            Err(CommandError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn from_record_rejects_other_schema() {
        let other = Record::new(crate::telemetry::TELEMETRY_SCHEMA);
        assert!(Command::from_record(other).is_err());
    }
}
