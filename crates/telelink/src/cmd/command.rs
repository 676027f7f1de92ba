use serde::Serialize;
use telelink_frame::encode_packet;
use telelink_packet::{Command, CommandTable, Packet};
use tracing::debug;

use crate::cmd::CommandArgs;
use crate::exit::{command_error, io_error, CliResult, SUCCESS};
use crate::output::{print_json, print_raw, print_table, to_hex, OutputFormat};

#[derive(Serialize)]
struct CommandOutput {
    command: &'static str,
    index: u8,
    value: u32,
    payload: String,
    frame: String,
    frame_size: usize,
}

pub fn run(args: CommandArgs, format: OutputFormat) -> CliResult<i32> {
    let table = CommandTable::standard();
    let line = args.line.join(" ");
    let request = table
        .parse_line(&line)
        .map_err(|err| command_error("invalid command", err))?;
    let command = Command::from_request(&table, &request)
        .map_err(|err| command_error("invalid command", err))?;
    let frame = encode_packet(&command);
    debug!(
        command = request.name,
        value = request.value,
        frame_size = frame.len(),
        "encoded command"
    );

    let out = CommandOutput {
        command: request.name,
        index: command.command_index(),
        value: command.command_value(),
        payload: command.record().hex_string(),
        frame: to_hex(&frame),
        frame_size: frame.len(),
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => print_table(
            &["COMMAND", "INDEX", "VALUE", "FRAME"],
            vec![vec![
                out.command.to_string(),
                out.index.to_string(),
                out.value.to_string(),
                out.frame.clone(),
            ]],
        ),
        OutputFormat::Pretty => println!(
            "command={} index={} value={} frame={}",
            out.command, out.index, out.value, out.frame
        ),
        OutputFormat::Raw => {
            print_raw(&frame).map_err(|err| io_error("write failed", err))?
        }
    }

    Ok(SUCCESS)
}
