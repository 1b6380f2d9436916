//! VBAN audio-over-UDP header primitives.
//!
//! vbanprims reads and writes the fixed VBAN packet header, resolves its
//! sample-rate codes and watches frame counters for dropped or reordered
//! frames.
//!
//! # Crate Structure
//!
//! - [`frame`] — Header codec, sample-rate table, sequence tracking
//!   (plus a `tokio_util` datagram codec behind the `async` feature)

/// Re-export frame types.
pub mod frame {
    pub use vbanprims_frame::*;
}
