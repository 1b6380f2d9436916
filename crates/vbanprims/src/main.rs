mod build_info;
mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "vbanprims", version, about = "VBAN packet header CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(
        long,
        value_name = "FORMAT",
        default_value = "text",
        env = "VBANPRIMS_LOG_FORMAT",
        global = true
    )]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "info",
        env = "VBANPRIMS_LOG_LEVEL",
        global = true
    )]
    log_level: LogLevel,

    /// Per-target log directives (RUST_LOG syntax), overriding --log-level.
    #[arg(long, value_name = "DIRECTIVES", env = "VBANPRIMS_LOG", global = true)]
    log_filter: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level, cli.log_filter.as_deref());

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_encode_subcommand() {
        let cli = Cli::try_parse_from([
            "vbanprims",
            "encode",
            "--rate",
            "48000",
            "--name",
            "Stream1",
            "--data",
            "hello",
        ])
        .expect("encode args should parse");

        assert!(matches!(cli.command, Command::Encode(_)));
    }

    #[test]
    fn rejects_conflicting_payload_args() {
        let err = Cli::try_parse_from([
            "vbanprims",
            "encode",
            "--rate",
            "48000",
            "--name",
            "x",
            "--data",
            "hello",
            "--file",
            "/tmp/payload.bin",
        ])
        .expect_err("conflicting args should fail");

        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn decode_requires_an_input() {
        let err = Cli::try_parse_from(["vbanprims", "decode"]).expect_err("input is required");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn every_env_fallback_is_reported_by_envinfo() {
        use clap::CommandFactory;

        fn collect(cmd: &clap::Command, out: &mut Vec<String>) {
            for arg in cmd.get_arguments() {
                if let Some(env) = arg.get_env() {
                    out.push(env.to_string_lossy().into_owned());
                }
            }
            for sub in cmd.get_subcommands() {
                collect(sub, out);
            }
        }

        let mut read = Vec::new();
        collect(&Cli::command(), &mut read);
        assert!(read.iter().any(|name| name == "VBANPRIMS_LOG"));
        for name in &read {
            assert!(
                build_info::ENV_VARS.iter().any(|(known, _)| *known == name.as_str()),
                "{name} is read by the CLI but missing from envinfo"
            );
        }
    }

    #[test]
    fn parses_sequence_subcommand() {
        let cli = Cli::try_parse_from(["vbanprims", "sequence", "a.bin", "b.bin", "--per-stream"])
            .expect("sequence args should parse");
        match cli.command {
            Command::Sequence(args) => {
                assert_eq!(args.files.len(), 2);
                assert!(args.per_stream);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
