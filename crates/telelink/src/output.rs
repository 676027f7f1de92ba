use std::fmt::Write as _;
use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use telelink_packet::{PacketSchema, TelemetryField, Value, COMMAND_SCHEMA, TELEMETRY_SCHEMA};

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

const COMMAND_FIELD_NAMES: [&str; 8] = [
    "packet_type",
    "command_index",
    "command_value",
    "filler_1",
    "filler_2",
    "filler_3",
    "filler_4",
    "filler_5",
];

/// Human name of field `index` in `schema`.
pub fn field_name(schema: &PacketSchema, index: usize) -> String {
    let known = if *schema == TELEMETRY_SCHEMA {
        TelemetryField::ALL.get(index).map(|field| field.name())
    } else if *schema == COMMAND_SCHEMA {
        COMMAND_FIELD_NAMES.get(index).copied()
    } else {
        None
    };
    known.map_or_else(|| format!("field_{index}"), str::to_string)
}

pub fn json_value(value: Value) -> serde_json::Value {
    match value {
        Value::Bool(v) => v.into(),
        Value::Byte(v) => v.into(),
        Value::Int16(v) => v.into(),
        Value::UInt16(v) => v.into(),
        Value::Int32(v) => v.into(),
        Value::UInt32(v) => v.into(),
        Value::Float32(v) => f64::from(v).into(),
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Parse hex digits, ignoring whitespace, `:` separators and a `0x` prefix.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let trimmed = input.trim();
    let trimmed = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let digits: Vec<u8> = trimmed
        .bytes()
        .filter(|b| !b.is_ascii_whitespace() && *b != b':')
        .collect();

    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }

    digits
        .chunks(2)
        .map(|pair| {
            let hi = hex_digit(pair[0])?;
            let lo = hex_digit(pair[1])?;
            Ok((hi << 4) | lo)
        })
        .collect()
}

fn hex_digit(byte: u8) -> Result<u8, String> {
    match byte {
        b'0'..=b'9' => Ok(byte - b'0'),
        b'a'..=b'f' => Ok(byte - b'a' + 10),
        b'A'..=b'F' => Ok(byte - b'A' + 10),
        other => Err(format!("invalid hex digit {:?}", char::from(other))),
    }
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_table(header: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    for row in rows {
        table.add_row(row);
    }
    println!("{table}");
}

pub fn print_raw(data: &[u8]) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    out.write_all(data)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let bytes = [0xC0, 0x00, 0x01, 0xDB, 0xDC, 0xFF];
        assert_eq!(to_hex(&bytes), "c00001dbdcff");
        assert_eq!(parse_hex("c00001dbdcff").unwrap(), bytes);
    }

    #[test]
    fn parse_hex_accepts_separators() {
        assert_eq!(parse_hex("0xC0 00:01").unwrap(), [0xC0, 0x00, 0x01]);
        assert_eq!(parse_hex("  ").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn parse_hex_rejects_bad_input() {
        assert!(parse_hex("c0c").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn names_known_fields() {
        assert_eq!(field_name(&TELEMETRY_SCHEMA, 1), "battery_voltage");
        assert_eq!(field_name(&TELEMETRY_SCHEMA, 45), "altitude_2");
        assert_eq!(field_name(&COMMAND_SCHEMA, 2), "command_value");
        assert_eq!(field_name(&COMMAND_SCHEMA, 8), "field_8");
    }

    #[test]
    fn json_values_keep_their_type() {
        assert_eq!(json_value(Value::Bool(true)), serde_json::json!(true));
        assert_eq!(json_value(Value::Int32(-5)), serde_json::json!(-5));
        assert_eq!(json_value(Value::Float32(0.5)), serde_json::json!(0.5));
        assert_eq!(json_value(Value::Float32(f32::NAN)), serde_json::Value::Null);
    }
}
