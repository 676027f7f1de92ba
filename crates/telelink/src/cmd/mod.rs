use clap::{Args, Subcommand, ValueEnum};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod command;
pub mod decode;
pub mod schema;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode an operator command line into an uplink frame.
    Command(CommandArgs),
    /// Decode one hex-encoded frame and print its fields.
    Decode(DecodeArgs),
    /// Print the field layout of a packet schema.
    Schema(SchemaArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Command(args) => command::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Schema(args) => schema::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

/// Packet schema selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SchemaName {
    Telemetry,
    Command,
}

/// Schema to decode with; `auto` reads the frame's discriminator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    #[default]
    Auto,
    Telemetry,
    Command,
}

#[derive(Args, Debug)]
pub struct CommandArgs {
    /// Command name and optional argument, e.g. `SWITCH_RELAYS 2`.
    #[arg(required = true, num_args = 1.., value_name = "LINE")]
    pub line: Vec<String>,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame bytes as hex, delimiters included.
    #[arg(value_name = "HEX")]
    pub hex: String,
    /// Schema to decode with.
    #[arg(long, value_enum, default_value = "auto")]
    pub kind: KindArg,
    /// Reject frames whose link-type byte is not 0x00.
    #[arg(long)]
    pub strict_link_type: bool,
}

#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Which schema to print.
    #[arg(value_enum)]
    pub name: SchemaName,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
