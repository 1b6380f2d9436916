use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use vbanprims_frame::sample_rate::{defined_rates, INDEX_COUNT};
use vbanprims_frame::{HEADER_SIZE, MAX_PACKET_SIZE, MAX_PAYLOAD_SIZE, STREAM_NAME_LEN};

use crate::build_info::{BuildInfo, ENV_VARS};
use crate::cmd::EnvinfoArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_json, OutputFormat};

const SCHEMA_ID: &str = "https://schemas.vbanprims.dev/cli/v1/envinfo.schema.json";

#[derive(Serialize)]
struct Limits {
    header_size: usize,
    stream_name_len: usize,
    max_payload_size: usize,
    max_packet_size: usize,
}

#[derive(Serialize)]
struct RateTable {
    codes: usize,
    defined: usize,
    reserved: usize,
}

#[derive(Serialize)]
struct EnvVar {
    name: &'static str,
    flag: &'static str,
    value: Option<String>,
}

#[derive(Serialize)]
struct Report {
    schema_id: &'static str,
    build: BuildInfo,
    limits: Limits,
    rate_table: RateTable,
    environment: Vec<EnvVar>,
}

impl Report {
    fn collect(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defined = defined_rates().count();
        Self {
            schema_id: SCHEMA_ID,
            build: BuildInfo::current(),
            limits: Limits {
                header_size: HEADER_SIZE,
                stream_name_len: STREAM_NAME_LEN,
                max_payload_size: MAX_PAYLOAD_SIZE,
                max_packet_size: MAX_PACKET_SIZE,
            },
            rate_table: RateTable {
                codes: INDEX_COUNT,
                defined,
                reserved: INDEX_COUNT - defined,
            },
            environment: ENV_VARS
                .iter()
                .map(|&(name, flag)| EnvVar {
                    name,
                    flag,
                    value: lookup(name),
                })
                .collect(),
        }
    }
}

pub fn run(_args: EnvinfoArgs, format: OutputFormat) -> CliResult<i32> {
    let report = Report::collect(|key| std::env::var(key).ok());
    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table | OutputFormat::Pretty => print_report(&report),
        OutputFormat::Raw => println!("{} {}", report.build.version, report.build.target),
    }
    Ok(SUCCESS)
}

fn print_report(report: &Report) {
    let build = &report.build;
    println!("vbanprims {} ({})", build.version, build.target);
    println!("  rustc {}, git {}", build.rustc, build.git_hash);
    println!("  features: {}", build.features.join(", "));
    println!(
        "  header {}B (name {}B), payload <= {}B, datagram <= {}B",
        report.limits.header_size,
        report.limits.stream_name_len,
        report.limits.max_payload_size,
        report.limits.max_packet_size
    );
    println!(
        "  rate codes: {} defined, {} reserved",
        report.rate_table.defined, report.rate_table.reserved
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["VARIABLE", "FLAG", "VALUE"]);
    for var in &report.environment {
        table.add_row(vec![
            var.name,
            var.flag,
            var.value.as_deref().unwrap_or("(not set)"),
        ]);
    }
    println!("{table}");
}
