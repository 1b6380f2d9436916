use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use vbanprims_frame::{sub_protocol_name, Header, SequenceEvent};

#[derive(Clone, Debug, Copy, ValueEnum)]
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

#[derive(Serialize)]
pub struct HeaderOutput<'a> {
    schema_id: &'static str,
    sub_protocol: u8,
    sub_protocol_name: &'static str,
    sample_rate_index: Option<u8>,
    sample_rate: u32,
    samples_per_frame: u8,
    format_byte2: u8,
    format_byte3: u8,
    stream_name: &'a str,
    frame_counter: u32,
    payload_size: usize,
}

impl<'a> HeaderOutput<'a> {
    pub fn new(header: &'a Header, payload_size: usize) -> Self {
        Self {
            schema_id: "https://schemas.vbanprims.dev/cli/v1/header.schema.json",
            sub_protocol: header.sub_protocol,
            sub_protocol_name: sub_protocol_name(header.sub_protocol),
            sample_rate_index: header.sample_rate_index(),
            sample_rate: header.sample_rate,
            samples_per_frame: header.samples_per_frame,
            format_byte2: header.format_byte2,
            format_byte3: header.format_byte3,
            stream_name: &header.stream_name,
            frame_counter: header.frame_counter,
            payload_size,
        }
    }
}

pub fn print_header(header: &Header, payload_size: usize, format: OutputFormat) {
    let out = HeaderOutput::new(header, payload_size);
    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"]);
            table.add_row(vec![
                "sub_protocol".to_string(),
                format!("0x{:02x} ({})", out.sub_protocol, out.sub_protocol_name),
            ]);
            table.add_row(vec![
                "sample_rate".to_string(),
                format!("{} Hz ({})", out.sample_rate, index_text(out.sample_rate_index)),
            ]);
            table.add_row(vec![
                "format".to_string(),
                format!(
                    "{} / {} / {}",
                    out.samples_per_frame, out.format_byte2, out.format_byte3
                ),
            ]);
            table.add_row(vec!["stream_name".to_string(), out.stream_name.to_string()]);
            table.add_row(vec![
                "frame_counter".to_string(),
                out.frame_counter.to_string(),
            ]);
            table.add_row(vec!["payload_size".to_string(), out.payload_size.to_string()]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "stream={} rate={}Hz sp={} format={}/{}/{} counter={} payload={}",
                out.stream_name,
                out.sample_rate,
                out.sub_protocol_name,
                out.samples_per_frame,
                out.format_byte2,
                out.format_byte3,
                out.frame_counter,
                out.payload_size
            );
        }
        OutputFormat::Raw => println!("{}", out.frame_counter),
    }
}

#[derive(Serialize)]
struct RateRow {
    index: u8,
    hz: Option<u32>,
}

#[derive(Serialize)]
struct RatesOutput {
    schema_id: &'static str,
    rates: Vec<RateRow>,
}

/// Print every 5-bit code, marking the reserved ones.
pub fn print_rates(rates: &[(u8, Option<u32>)], format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(&RatesOutput {
            schema_id: "https://schemas.vbanprims.dev/cli/v1/rates.schema.json",
            rates: rates
                .iter()
                .map(|&(index, hz)| RateRow { index, hz })
                .collect(),
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["INDEX", "HZ"]);
            for &(index, hz) in rates {
                table.add_row(vec![index.to_string(), rate_text(hz)]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for &(index, hz) in rates {
                println!("{index:>2} {}", rate_text(hz));
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SequenceRow {
    pub file: String,
    pub stream_name: Option<String>,
    pub frame_counter: Option<u32>,
    pub event: &'static str,
    pub gap: Option<u32>,
    pub detail: String,
}

impl SequenceRow {
    pub fn observed(file: String, header: &Header, event: Option<&SequenceEvent>) -> Self {
        let (kind, gap, detail) = match event {
            None if header.frame_counter == 0 => ("skipped", None, "zero counter".to_string()),
            None => ("first", None, String::new()),
            Some(SequenceEvent::Advanced { previous, gap, .. }) => {
                ("advanced", Some(*gap), format!("previous={previous}"))
            }
            Some(SequenceEvent::Regression { previous, .. }) => {
                ("regression", None, format!("previous={previous}"))
            }
        };
        Self {
            file,
            stream_name: Some(header.stream_name.clone()),
            frame_counter: Some(header.frame_counter),
            event: kind,
            gap,
            detail,
        }
    }

    pub fn rejected(file: String, detail: String) -> Self {
        Self {
            file,
            stream_name: None,
            frame_counter: None,
            event: "rejected",
            gap: None,
            detail,
        }
    }
}

#[derive(Serialize)]
struct SequenceOutput<'a> {
    schema_id: &'static str,
    keying: &'a str,
    rows: &'a [SequenceRow],
    regressions: usize,
    dropped_frames: u64,
}

pub fn print_sequence(
    rows: &[SequenceRow],
    keying: &str,
    regressions: usize,
    dropped_frames: u64,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => print_json(&SequenceOutput {
            schema_id: "https://schemas.vbanprims.dev/cli/v1/sequence-report.schema.json",
            keying,
            rows,
            regressions,
            dropped_frames,
        }),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FILE", "STREAM", "COUNTER", "EVENT", "GAP", "DETAIL"]);
            for row in rows {
                table.add_row(vec![
                    row.file.clone(),
                    row.stream_name.clone().unwrap_or_default(),
                    row.frame_counter.map(|c| c.to_string()).unwrap_or_default(),
                    row.event.to_string(),
                    row.gap.map(|g| g.to_string()).unwrap_or_default(),
                    row.detail.clone(),
                ]);
            }
            println!("{table}");
            println!("keying={keying} regressions={regressions} dropped_frames={dropped_frames}");
        }
        OutputFormat::Pretty => {
            for row in rows {
                println!(
                    "{} event={} counter={} {}",
                    row.file,
                    row.event,
                    row.frame_counter.map(|c| c.to_string()).unwrap_or_default(),
                    row.detail
                );
            }
            println!("keying={keying} regressions={regressions} dropped_frames={dropped_frames}");
        }
        OutputFormat::Raw => println!("{regressions} {dropped_frames}"),
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

fn index_text(index: Option<u8>) -> String {
    index.map_or_else(|| "unlisted".to_string(), |i| format!("index {i}"))
}

fn rate_text(hz: Option<u32>) -> String {
    hz.map_or_else(|| "reserved".to_string(), |hz| hz.to_string())
}
