use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// Build the event filter: explicit directives win, otherwise `level` applies
/// to every target.
///
/// Directives use the `RUST_LOG` syntax, e.g. `vbanprims_frame::sequence=warn`
/// to keep regressions but drop the per-frame gap reports.
pub fn build_filter(level: LogLevel, directives: Option<&str>) -> EnvFilter {
    let default = LevelFilter::from(level);
    match directives {
        Some(spec) => EnvFilter::builder()
            .with_default_directive(default.into())
            .parse(spec)
            .unwrap_or_else(|err| {
                eprintln!("warning: ignoring invalid log filter {spec:?}: {err}");
                EnvFilter::new(default.to_string())
            }),
        None => EnvFilter::new(default.to_string()),
    }
}

/// Install the stderr subscriber.
pub fn init_logging(format: LogFormat, level: LogLevel, directives: Option<&str>) {
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(build_filter(level, directives))
        .with_ansi(false)
        .with_target(directives.is_some());

    match format {
        LogFormat::Text => {
            let _ = builder.try_init();
        }
        LogFormat::Json => {
            let _ = builder.json().try_init();
        }
    }
}
