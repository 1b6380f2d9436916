#![cfg(feature = "cli")]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use vbanprims::frame::{decode_header, encode_packet, Header};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "vbancli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn vbanprims(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vbanprims"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("vbanprims should run")
}

fn write_datagram(dir: &Path, name: &str, header: &Header) -> PathBuf {
    let path = dir.join(name);
    let datagram = encode_packet(header, b"pcm").expect("header should encode");
    std::fs::write(&path, &datagram).expect("datagram should be writable");
    path
}

#[test]
fn encode_to_file_then_decode() {
    let dir = unique_temp_dir("encode");
    let out = dir.join("packet.bin");

    let output = vbanprims(&[
        "--format",
        "json",
        "encode",
        "--rate",
        "44100",
        "--name",
        "MyStream",
        "--counter",
        "12",
        "--data",
        "hello",
        "--out",
        out.to_str().expect("utf-8 temp path"),
    ]);
    assert!(output.status.success());

    let datagram = std::fs::read(&out).expect("datagram should exist");
    let header = decode_header(&datagram).expect("datagram should decode");
    assert_eq!(header.stream_name, "MyStream");
    assert_eq!(header.sample_rate, 44_100);
    assert_eq!(header.frame_counter, 12);
    assert_eq!(&datagram[28..], b"hello");

    let output = vbanprims(&[
        "--format",
        "json",
        "decode",
        "--file",
        out.to_str().expect("utf-8 temp path"),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("header.schema.json"));
    assert!(stdout.contains("\"stream_name\":\"MyStream\""));
    assert!(stdout.contains("\"payload_size\":5"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn encode_unknown_rate_returns_usage() {
    let output = vbanprims(&["encode", "--rate", "99999", "--name", "x"]);
    assert_eq!(output.status.code(), Some(64));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported sample rate"));
}

#[test]
fn decode_reserved_rate_returns_data_invalid() {
    let mut datagram = encode_packet(&Header::new(48_000, "x"), b"")
        .expect("header should encode")
        .to_vec();
    datagram[4] = 25;

    let output = vbanprims(&["decode", "--hex", &hex::encode(&datagram)]);
    assert_eq!(output.status.code(), Some(60));
}

#[test]
fn decode_strict_prefix_rejects_foreign_tag() {
    let mut datagram = encode_packet(&Header::new(48_000, "x"), b"")
        .expect("header should encode")
        .to_vec();
    datagram[..4].copy_from_slice(b"NOPE");
    let hex = hex::encode(&datagram);

    let lenient = vbanprims(&["--format", "json", "decode", "--hex", &hex]);
    assert!(lenient.status.success());

    let strict = vbanprims(&["decode", "--hex", &hex, "--strict-prefix"]);
    assert_eq!(strict.status.code(), Some(60));
}

#[test]
fn sequence_reports_gaps_and_regressions() {
    let dir = unique_temp_dir("sequence");
    let files: Vec<PathBuf> = [100u32, 101, 105, 50]
        .iter()
        .enumerate()
        .map(|(i, &counter)| {
            let header = Header {
                frame_counter: counter,
                ..Header::new(48_000, "Stream1")
            };
            write_datagram(&dir, &format!("{i}.bin"), &header)
        })
        .collect();

    let mut args = vec!["--format", "json", "sequence"];
    args.extend(files.iter().map(|p| p.to_str().expect("utf-8 temp path")));
    let output = vbanprims(&args);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("sequence-report.schema.json"));
    assert!(stdout.contains("\"regressions\":1"));
    assert!(stdout.contains("\"dropped_frames\":3"));
    assert!(stdout.contains("\"event\":\"first\""));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn sequence_per_stream_separates_names() {
    let dir = unique_temp_dir("per-stream");
    let a = write_datagram(
        &dir,
        "a.bin",
        &Header {
            frame_counter: 900,
            ..Header::new(48_000, "A")
        },
    );
    let b = write_datagram(
        &dir,
        "b.bin",
        &Header {
            frame_counter: 3,
            ..Header::new(48_000, "B")
        },
    );
    let a_str = a.to_str().expect("utf-8 temp path");
    let b_str = b.to_str().expect("utf-8 temp path");

    let global = vbanprims(&["--format", "json", "sequence", a_str, b_str]);
    assert!(String::from_utf8_lossy(&global.stdout).contains("\"regressions\":1"));

    let per_stream = vbanprims(&["--format", "json", "sequence", a_str, b_str, "--per-stream"]);
    let stdout = String::from_utf8_lossy(&per_stream.stdout);
    assert!(stdout.contains("\"regressions\":0"));
    assert!(stdout.contains("\"keying\":\"per-stream\""));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn rates_lists_reserved_codes() {
    let output = vbanprims(&["--format", "json", "rates"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("{\"index\":16,\"hz\":44100}"));
    assert!(stdout.contains("{\"index\":31,\"hz\":null}"));
}

#[test]
fn envinfo_reports_version() {
    let output = vbanprims(&["--format", "json", "envinfo"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("envinfo.schema.json"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
