/// Errors that can occur during header encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// The packed byte carries a reserved sample-rate index (21-31).
    #[error("invalid sample rate index {0} (reserved)")]
    InvalidSampleRate(u8),

    /// The header's sample rate has no entry in the sample-rate table.
    #[error("unsupported sample rate {0} Hz")]
    UnsupportedSampleRate(u32),

    /// The buffer is shorter than a complete header.
    #[error("truncated header ({actual} bytes, need {expected})")]
    Truncated { expected: usize, actual: usize },

    /// The identification prefix does not read "VBAN" (strict decoding only).
    #[error("invalid packet prefix {0:02x?} (expected \"VBAN\")")]
    InvalidPrefix([u8; 4]),

    /// An I/O error surfaced through a framed datagram stream.
    #[error("datagram I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HeaderError>;
