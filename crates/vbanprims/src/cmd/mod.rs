use clap::{ArgGroup, Args, Subcommand, ValueEnum};
use std::path::PathBuf;

use vbanprims_frame::SubProtocol;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod decode;
pub mod encode;
pub mod envinfo;
pub mod rates;
pub mod sequence;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode the header of a captured datagram.
    Decode(DecodeArgs),
    /// Build a datagram from a header and payload.
    Encode(EncodeArgs),
    /// List the sample-rate index table.
    Rates(RatesArgs),
    /// Replay captured datagrams through the frame sequence tracker.
    Sequence(SequenceArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Rates(args) => rates::run(args, format),
        Command::Sequence(args) => sequence::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["file", "hex"])))]
pub struct DecodeArgs {
    /// Read the datagram from a file.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Datagram as a hex string.
    #[arg(long)]
    pub hex: Option<String>,
    /// Reject datagrams whose prefix is not "VBAN".
    #[arg(long, env = "VBANPRIMS_STRICT_PREFIX")]
    pub strict_prefix: bool,
}

#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum SubProtocolArg {
    #[default]
    Audio,
    Serial,
    Text,
    Service,
}

impl From<SubProtocolArg> for SubProtocol {
    fn from(value: SubProtocolArg) -> Self {
        match value {
            SubProtocolArg::Audio => SubProtocol::Audio,
            SubProtocolArg::Serial => SubProtocol::Serial,
            SubProtocolArg::Text => SubProtocol::Text,
            SubProtocolArg::Service => SubProtocol::Service,
        }
    }
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Sample rate in Hz (must be in the rate table).
    #[arg(long)]
    pub rate: u32,
    /// Stream name (truncated to 16 bytes).
    #[arg(long)]
    pub name: String,
    /// Sub-protocol tag.
    #[arg(long, value_enum, default_value = "audio")]
    pub sub_protocol: SubProtocolArg,
    /// Raw samples-per-frame byte.
    #[arg(long, default_value = "0")]
    pub samples: u8,
    /// Raw second format byte.
    #[arg(long, default_value = "0")]
    pub format2: u8,
    /// Raw third format byte.
    #[arg(long, default_value = "0")]
    pub format3: u8,
    /// Frame counter.
    #[arg(long, default_value = "0")]
    pub counter: u32,
    /// Raw string payload.
    #[arg(long, conflicts_with = "file")]
    pub data: Option<String>,
    /// Read payload from file.
    #[arg(long, conflicts_with = "data")]
    pub file: Option<PathBuf>,
    /// Write the datagram to a file instead of stdout.
    #[arg(long, short = 'o')]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub struct RatesArgs {}

#[derive(Args, Debug)]
pub struct SequenceArgs {
    /// Datagram files, in arrival order.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
    /// Track each stream name separately instead of one global sequence.
    #[arg(long)]
    pub per_stream: bool,
    /// Reject datagrams whose prefix is not "VBAN".
    #[arg(long, env = "VBANPRIMS_STRICT_PREFIX")]
    pub strict_prefix: bool,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}
