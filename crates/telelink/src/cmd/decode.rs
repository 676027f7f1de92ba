use serde::Serialize;
use telelink_frame::{decode_with_config, peek_kind, FrameConfig};
use telelink_packet::{
    Command, CommandTable, Packet, PacketKind, PacketSchema, Record, Telemetry, COMMAND_SCHEMA,
    TELEMETRY_SCHEMA,
};
use tracing::debug;

use crate::cmd::{DecodeArgs, KindArg};
use crate::exit::{
    frame_error, io_error, CliError, CliResult, DATA_INVALID, INTERNAL, SUCCESS, USAGE,
};
use crate::output::{
    field_name, json_value, parse_hex, print_json, print_raw, print_table, OutputFormat,
};

#[derive(Serialize)]
struct FieldOutput {
    name: String,
    #[serde(rename = "type")]
    field_type: &'static str,
    value: serde_json::Value,
}

#[derive(Serialize)]
struct DecodeOutput {
    kind: &'static str,
    schema: &'static str,
    payload: String,
    fields: Vec<FieldOutput>,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let frame = parse_hex(&args.hex)
        .map_err(|err| CliError::new(USAGE, format!("invalid hex frame: {err}")))?;
    let schema = select_schema(args.kind, &frame)?;
    let config = FrameConfig {
        enforce_link_type: args.strict_link_type,
        ..FrameConfig::default()
    };
    debug!(schema = schema.name(), frame_size = frame.len(), "decoding frame");

    let record = decode_with_config(schema, &frame, &config)
        .map_err(|err| frame_error("decode failed", err))?;

    match format {
        OutputFormat::Json => print_json(&describe(&record)),
        OutputFormat::Table => print_table(
            &["#", "NAME", "TYPE", "VALUE"],
            record
                .values()
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    vec![
                        index.to_string(),
                        field_name(record.schema(), index),
                        value.field_type().name().to_string(),
                        value.to_string(),
                    ]
                })
                .collect(),
        ),
        OutputFormat::Pretty => print_pretty(record)?,
        OutputFormat::Raw => {
            print_raw(&record.to_bytes()).map_err(|err| io_error("write failed", err))?
        }
    }

    Ok(SUCCESS)
}

fn select_schema(kind: KindArg, frame: &[u8]) -> CliResult<PacketSchema> {
    match kind {
        KindArg::Telemetry => Ok(TELEMETRY_SCHEMA),
        KindArg::Command => Ok(COMMAND_SCHEMA),
        KindArg::Auto => match peek_kind(frame) {
            PacketKind::Data => Ok(TELEMETRY_SCHEMA),
            PacketKind::Command => Ok(COMMAND_SCHEMA),
            other => Err(CliError::new(
                DATA_INVALID,
                format!("cannot pick a schema for packet kind {other}; pass --kind"),
            )),
        },
    }
}

fn describe(record: &Record) -> DecodeOutput {
    DecodeOutput {
        kind: record.kind().name(),
        schema: record.schema().name(),
        payload: record.hex_string(),
        fields: record
            .values()
            .iter()
            .enumerate()
            .map(|(index, value)| FieldOutput {
                name: field_name(record.schema(), index),
                field_type: value.field_type().name(),
                value: json_value(*value),
            })
            .collect(),
    }
}

fn print_pretty(record: Record) -> CliResult<()> {
    let schema = *record.schema();
    if schema == TELEMETRY_SCHEMA {
        let telemetry = Telemetry::from_record(record)
            .map_err(|err| CliError::new(INTERNAL, err.to_string()))?;
        print!("{telemetry}");
    } else if schema == COMMAND_SCHEMA {
        let command = Command::from_record(record)
            .map_err(|err| CliError::new(INTERNAL, err.to_string()))?;
        let table = CommandTable::standard();
        println!(
            "command={} index={} value={}",
            command.command_name(&table).unwrap_or("<unknown>"),
            command.command_index(),
            command.command_value()
        );
    } else {
        for (index, value) in record.values().iter().enumerate() {
            println!("{}={}", field_name(&schema, index), value);
        }
    }
    Ok(())
}
