use vbanprims_frame::{decode_header_with, FrameSequenceTracker, SequenceEvent, TrackingKey};

use crate::cmd::decode::{codec_config, read_datagram};
use crate::cmd::SequenceArgs;
use crate::exit::{CliResult, FAILURE, SUCCESS};
use crate::output::{print_sequence, OutputFormat, SequenceRow};

pub fn run(args: SequenceArgs, format: OutputFormat) -> CliResult<i32> {
    let keying = if args.per_stream {
        TrackingKey::PerStream
    } else {
        TrackingKey::Global
    };
    let config = codec_config(args.strict_prefix);
    let mut tracker = FrameSequenceTracker::with_key(keying);

    let mut rows = Vec::with_capacity(args.files.len());
    let mut regressions = 0usize;
    let mut dropped_frames = 0u64;
    let mut rejected = 0usize;

    for path in &args.files {
        let file = path.display().to_string();
        let datagram = read_datagram(path)?;

        let header = match decode_header_with(&datagram, &config) {
            Ok(header) => header,
            Err(err) => {
                // Undecodable datagrams are discarded, the replay carries on.
                tracing::warn!(file = %file, error = %err, "datagram rejected");
                rejected += 1;
                rows.push(SequenceRow::rejected(file, err.to_string()));
                continue;
            }
        };

        let event = tracker.observe(&header);
        match &event {
            Some(SequenceEvent::Regression { .. }) => regressions += 1,
            Some(advanced) => dropped_frames += u64::from(advanced.dropped()),
            None => {}
        }
        rows.push(SequenceRow::observed(file, &header, event.as_ref()));
    }

    let keying_name = match keying {
        TrackingKey::Global => "global",
        TrackingKey::PerStream => "per-stream",
    };
    print_sequence(&rows, keying_name, regressions, dropped_frames, format);

    if rejected == args.files.len() {
        Ok(FAILURE)
    } else {
        Ok(SUCCESS)
    }
}
