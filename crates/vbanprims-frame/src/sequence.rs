//! Frame counter continuity diagnostics.
//!
//! [`FrameSequenceTracker`] remembers the last non-zero frame counter per
//! tracking key and reports regressions and gaps through `tracing`. It never
//! fails and never influences decoding.

use std::collections::HashMap;

use crate::codec::Header;

/// Key used for every stream under [`TrackingKey::Global`].
pub const GLOBAL_KEY: &str = "global";

/// How observed headers are grouped into sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingKey {
    /// One sequence shared by every stream.
    #[default]
    Global,
    /// One sequence per stream name.
    PerStream,
}

/// Outcome of observing a header that had a predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceEvent {
    /// The counter moved forward (or repeated) by `gap`.
    Advanced {
        key: String,
        previous: u32,
        current: u32,
        gap: u32,
    },
    /// The counter went backwards: reordering, sender restart or wraparound.
    Regression {
        key: String,
        previous: u32,
        current: u32,
    },
}

impl SequenceEvent {
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Self::Regression { .. })
    }

    /// Number of frames missing between the two observations.
    pub fn dropped(&self) -> u32 {
        match self {
            Self::Advanced { gap, .. } => gap.saturating_sub(1),
            Self::Regression { .. } => 0,
        }
    }
}

/// Tracks the last frame counter seen per key.
///
/// Not synchronized: share it across threads behind the caller's own lock.
#[derive(Debug, Default)]
pub struct FrameSequenceTracker {
    keying: TrackingKey,
    last: HashMap<String, u32>,
}

impl FrameSequenceTracker {
    /// Create a tracker with a single global sequence.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(keying: TrackingKey) -> Self {
        Self {
            keying,
            last: HashMap::new(),
        }
    }

    pub fn keying(&self) -> TrackingKey {
        self.keying
    }

    /// Record `header.frame_counter` and report how it relates to the last one.
    ///
    /// A zero counter is treated as absent: state is left untouched and
    /// `None` is returned. The first non-zero counter for a key also returns
    /// `None`.
    pub fn observe(&mut self, header: &Header) -> Option<SequenceEvent> {
        let current = header.frame_counter;
        if current == 0 {
            return None;
        }

        let key = self.key_for(header);
        let previous = self.last.insert(key.to_string(), current)?;

        if previous > current {
            tracing::warn!(key, previous, current, "frame counter regressed");
            Some(SequenceEvent::Regression {
                key: key.to_string(),
                previous,
                current,
            })
        } else {
            let gap = current - previous;
            tracing::info!(key, previous, current, gap, "frame counter advanced");
            Some(SequenceEvent::Advanced {
                key: key.to_string(),
                previous,
                current,
                gap,
            })
        }
    }

    /// Last counter recorded for `key`.
    pub fn last_seen(&self, key: &str) -> Option<u32> {
        self.last.get(key).copied()
    }

    /// Number of keys with a recorded counter.
    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }

    /// Forget every recorded counter.
    pub fn reset(&mut self) {
        self.last.clear();
    }

    fn key_for<'a>(&self, header: &'a Header) -> &'a str {
        match self.keying {
            TrackingKey::Global => GLOBAL_KEY,
            TrackingKey::PerStream => &header.stream_name,
        }
    }
}
