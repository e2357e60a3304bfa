//! Touch event data model and per-pad aggregation.
//!
//! The device reports every touch as a `{timestamp, pad, user}` record. The
//! event log is replaced wholesale on every poll; [`PadCounts`] is recomputed
//! from scratch each time so it is always a pure function of the current log.

use serde::Deserialize;

/// Number of touch pads on the device.
pub const PAD_COUNT: usize = 7;

/// Chart labels, one per pad.
pub const PAD_LABELS: [&str; PAD_COUNT] = [
    "Touch 1", "Touch 2", "Touch 3", "Touch 4", "Touch 5", "Touch 6", "Touch 7",
];

/// A single touch event as reported by `/api/touch-logs`.
///
/// Fields are kept as the server-supplied strings; ordering within the log is
/// arrival order and assumed chronological.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TouchEvent {
    pub timestamp: String,
    pub pad: String,
    pub user: String,
}

impl TouchEvent {
    /// Parse the zero-based bucket index from the pad identifier.
    ///
    /// Pad identifiers have the form `Touch_<n>` with n starting at 1, so
    /// `Touch_3` maps to bucket 2. Returns `None` for identifiers that do not
    /// parse or whose index falls outside `[0, PAD_COUNT)`; such events are
    /// excluded from the histogram but still counted and rendered elsewhere.
    pub fn pad_index(&self) -> Option<usize> {
        let number: i64 = self.pad.strip_prefix("Touch_")?.parse().ok()?;
        let index = number - 1;
        if (0..PAD_COUNT as i64).contains(&index) {
            Some(index as usize)
        } else {
            None
        }
    }
}

/// Per-pad event histogram, recomputed from the full log on every poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PadCounts {
    counts: [u64; PAD_COUNT],
}

impl PadCounts {
    /// Compute the histogram for an event log.
    ///
    /// Events with an unparseable or out-of-range pad index are silently
    /// dropped here (policy, not an error); they still contribute to the
    /// total event count shown in the status area.
    pub fn from_events(events: &[TouchEvent]) -> Self {
        let mut counts = [0u64; PAD_COUNT];
        for event in events {
            if let Some(index) = event.pad_index() {
                counts[index] += 1;
            }
        }
        Self { counts }
    }

    /// Count for a single pad bucket.
    pub fn get(&self, index: usize) -> u64 {
        self.counts[index]
    }

    /// All bucket values in pad order.
    pub fn values(&self) -> &[u64; PAD_COUNT] {
        &self.counts
    }

    /// Sum across all buckets (events with a valid pad index).
    pub fn sum(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bucket value, used to scale the chart axis.
    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
