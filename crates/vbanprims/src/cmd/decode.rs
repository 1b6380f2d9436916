use std::fs;
use std::path::Path;

use vbanprims_frame::{decode_packet_with, CodecConfig};

use crate::cmd::DecodeArgs;
use crate::exit::{header_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_header, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let datagram = match (&args.file, &args.hex) {
        (Some(path), _) => read_datagram(path)?,
        (None, Some(text)) => parse_hex(text)?,
        (None, None) => return Err(CliError::new(USAGE, "either --file or --hex is required")),
    };

    let config = codec_config(args.strict_prefix);
    let packet =
        decode_packet_with(&datagram, &config).map_err(|err| header_error("decode failed", err))?;
    tracing::debug!(
        stream = %packet.header.stream_name,
        size = datagram.len(),
        "decoded datagram"
    );

    print_header(&packet.header, packet.payload.len(), format);
    Ok(SUCCESS)
}

pub fn codec_config(strict_prefix: bool) -> CodecConfig {
    if strict_prefix {
        CodecConfig::strict()
    } else {
        CodecConfig::default()
    }
}

pub fn read_datagram(path: &Path) -> CliResult<Vec<u8>> {
    fs::read(path).map_err(|err| io_error(&format!("failed reading {}", path.display()), err))
}

/// Parse a hex string, tolerating whitespace and an optional `0x` prefix.
fn parse_hex(text: &str) -> CliResult<Vec<u8>> {
    let compact: String = text.split_whitespace().collect();
    let digits = compact.strip_prefix("0x").unwrap_or(&compact);
    hex::decode(digits).map_err(|err| CliError::new(USAGE, format!("--hex is not valid hex: {err}")))
}
