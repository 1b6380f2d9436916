use std::fmt;
use std::io;

use vbanprims_frame::HeaderError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn header_error(context: &str, err: HeaderError) -> CliError {
    match err {
        HeaderError::Io(source) => io_error(context, source),
        HeaderError::UnsupportedSampleRate(_) => CliError::new(USAGE, format!("{context}: {err}")),
        HeaderError::InvalidSampleRate(_)
        | HeaderError::Truncated { .. }
        | HeaderError::InvalidPrefix(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failures_are_data_invalid() {
        let err = header_error("decode failed", HeaderError::InvalidSampleRate(25));
        assert_eq!(err.code, DATA_INVALID);
        assert!(err.message.starts_with("decode failed: "));
    }

    #[test]
    fn unsupported_rate_is_usage() {
        let err = header_error("encode failed", HeaderError::UnsupportedSampleRate(99_999));
        assert_eq!(err.code, USAGE);
    }

    #[test]
    fn io_not_found_is_failure() {
        let err = io_error("read", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.code, FAILURE);
    }
}
