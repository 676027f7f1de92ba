use serde::Serialize;
use telelink_packet::{PacketSchema, COMMAND_SCHEMA, TELEMETRY_SCHEMA};

use crate::cmd::{SchemaArgs, SchemaName};
use crate::exit::{CliResult, SUCCESS};
use crate::output::{field_name, print_json, print_table, OutputFormat};

#[derive(Serialize)]
struct FieldLayout {
    index: usize,
    name: String,
    #[serde(rename = "type")]
    field_type: &'static str,
    offset: usize,
    width: usize,
}

#[derive(Serialize)]
struct SchemaOutput {
    schema: &'static str,
    field_count: usize,
    byte_width: usize,
    fields: Vec<FieldLayout>,
}

pub fn run(args: SchemaArgs, format: OutputFormat) -> CliResult<i32> {
    let out = describe(match args.name {
        SchemaName::Telemetry => TELEMETRY_SCHEMA,
        SchemaName::Command => COMMAND_SCHEMA,
    });

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["#", "NAME", "TYPE", "OFFSET", "WIDTH"],
            out.fields
                .iter()
                .map(|f| {
                    vec![
                        f.index.to_string(),
                        f.name.clone(),
                        f.field_type.to_string(),
                        f.offset.to_string(),
                        f.width.to_string(),
                    ]
                })
                .collect(),
        ),
        OutputFormat::Pretty | OutputFormat::Raw => {
            println!(
                "{}: {} fields, {} bytes",
                out.schema, out.field_count, out.byte_width
            );
            for f in &out.fields {
                println!(
                    "{:>3} {:<24} {:<4} @{:<3} ({}B)",
                    f.index, f.name, f.field_type, f.offset, f.width
                );
            }
        }
    }

    Ok(SUCCESS)
}

fn describe(schema: PacketSchema) -> SchemaOutput {
    let fields = schema
        .fields()
        .iter()
        .enumerate()
        .map(|(index, ty)| FieldLayout {
            index,
            name: field_name(&schema, index),
            field_type: ty.name(),
            offset: schema.offset_of(index).unwrap_or_default(),
            width: ty.width(),
        })
        .collect();

    SchemaOutput {
        schema: schema.name(),
        field_count: schema.len(),
        byte_width: schema.byte_width(),
        fields,
    }
}
