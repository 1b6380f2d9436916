use std::fs;

use vbanprims_frame::{encode_packet, Header, SubProtocol};

use crate::cmd::EncodeArgs;
use crate::exit::{header_error, io_error, CliResult, SUCCESS};
use crate::output::{print_header, print_raw, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;
    let header = build_header(&args);

    let datagram =
        encode_packet(&header, &payload).map_err(|err| header_error("encode failed", err))?;
    let payload_size = datagram.len() - vbanprims_frame::HEADER_SIZE;
    if payload_size < payload.len() {
        tracing::warn!(
            requested = payload.len(),
            kept = payload_size,
            "payload truncated to protocol maximum"
        );
    }

    match &args.out {
        Some(path) => {
            fs::write(path, &datagram).map_err(|err| {
                io_error(&format!("failed writing {}", path.display()), err)
            })?;
            tracing::info!(path = %path.display(), size = datagram.len(), "datagram written");
            print_header(&header, payload_size, format);
        }
        None => match format {
            OutputFormat::Raw => print_raw(&datagram),
            _ => println!("{}", hex::encode(&datagram)),
        },
    }

    Ok(SUCCESS)
}

fn build_header(args: &EncodeArgs) -> Header {
    Header {
        sub_protocol: SubProtocol::from(args.sub_protocol).bits(),
        sample_rate: args.rate,
        samples_per_frame: args.samples,
        format_byte2: args.format2,
        format_byte3: args.format3,
        stream_name: args.name.clone(),
        frame_counter: args.counter,
    }
}

fn resolve_payload(args: &EncodeArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    Ok(Vec::new())
}
