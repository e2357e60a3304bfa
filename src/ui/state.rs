//! Dashboard state management
//!
//! This module owns everything the renderer needs to draw a frame: the
//! current event log, the derived per-pad histogram, indicator activity,
//! and pending notifications. The event log is replaced wholesale on every
//! successful poll; nothing accumulates across polls except the deliberately
//! sticky last-event label.

use crate::model::{PadCounts, TouchEvent, PAD_COUNT};
use chrono::{DateTime, Local, NaiveDateTime};
use rand::Rng;
use std::time::{Duration, Instant};

/// How long a simulated indicator stays lit.
pub const INDICATOR_ACTIVE_FOR: Duration = Duration::from_millis(500);

/// How long a notification banner stays visible.
pub const NOTIFICATION_VISIBLE_FOR: Duration = Duration::from_secs(3);

/// Chance per pad per poll cycle of a simulated indicator firing.
pub const INDICATOR_TRIGGER_CHANCE: f64 = 0.1;

/// Notification styling kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient banner. Banners stack without dedup or queueing; each call to
/// [`DashboardState::notify`] appends an independent entry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    expires_at: Instant,
}

impl Notification {
    /// True once the banner should no longer be drawn.
    pub fn expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// All state required to render one dashboard frame.
#[derive(Debug)]
pub struct DashboardState {
    /// The full server-authoritative event log from the latest successful poll.
    pub events: Vec<TouchEvent>,

    /// Per-pad histogram derived from `events`; replaced together with it.
    pub counts: PadCounts,

    /// Endpoint shown in the header.
    endpoint: String,

    /// Outcome of the most recent poll; `false` until the first success.
    online: bool,

    /// Last-event label. Deliberately sticky: an empty poll leaves the
    /// previous value in place, matching the web UI.
    last_event: Option<String>,

    /// Per-pad simulated activity deadlines; `Some` means lit until then.
    indicators: [Option<Instant>; PAD_COUNT],

    /// Pending banners, oldest first.
    notifications: Vec<Notification>,
}

impl DashboardState {
    /// Create empty state for the given endpoint description.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            counts: PadCounts::default(),
            endpoint: endpoint.into(),
            online: false,
            last_event: None,
            indicators: [None; PAD_COUNT],
            notifications: Vec::new(),
        }
    }

    /// Replace the event log and recompute every derived view.
    pub fn apply_log(&mut self, events: Vec<TouchEvent>) {
        self.counts = PadCounts::from_events(&events);
        if let Some(last) = events.last() {
            self.last_event = Some(format_local_time(&last.timestamp));
        }
        self.events = events;
        self.online = true;
    }

    /// Record a failed poll. Previously loaded data stays untouched.
    pub fn record_failure(&mut self) {
        self.online = false;
    }

    /// Total number of events in the current log, including events whose pad
    /// index falls outside the histogram.
    pub fn total_events(&self) -> usize {
        self.events.len()
    }

    /// Formatted time of the most recent event, if any log has been seen.
    pub fn last_event_label(&self) -> Option<&str> {
        self.last_event.as_deref()
    }

    /// Endpoint description for the header.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the most recent poll succeeded.
    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Run one simulated indicator cycle.
    ///
    /// Not data-driven: each pad that is not already lit fires with a fixed
    /// 10% chance and clears [`INDICATOR_ACTIVE_FOR`] later. This placeholder
    /// is carried over from the device web UI deliberately; real indicator
    /// data would have to come from the device API.
    pub fn simulate_indicators(&mut self, rng: &mut impl Rng, now: Instant) {
        for slot in self.indicators.iter_mut() {
            let lit = slot.is_some_and(|deadline| deadline > now);
            if !lit && rng.gen_bool(INDICATOR_TRIGGER_CHANCE) {
                *slot = Some(now + INDICATOR_ACTIVE_FOR);
            }
        }
    }

    /// Whether pad `index` is currently lit.
    pub fn indicator_active(&self, index: usize, now: Instant) -> bool {
        self.indicators[index].is_some_and(|deadline| deadline > now)
    }

    /// Append a transient notification banner.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        self.notifications.push(Notification {
            message: message.into(),
            severity,
            expires_at: now + NOTIFICATION_VISIBLE_FOR,
        });
    }

    /// Pending banners, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Drop expired indicators and notifications.
    pub fn prune(&mut self, now: Instant) {
        for slot in self.indicators.iter_mut() {
            if slot.is_some_and(|deadline| deadline <= now) {
                *slot = None;
            }
        }
        self.notifications.retain(|n| !n.expired(now));
    }
}

/// Format a server-supplied timestamp for the last-event slot.
///
/// The firmware emits `%Y-%m-%d %H:%M:%S`; RFC3339 is accepted as well and
/// converted to local time. Anything else is shown verbatim.
pub fn format_local_time(timestamp: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return parsed.with_timezone(&Local).format("%H:%M:%S").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S") {
        return parsed.format("%H:%M:%S").to_string();
    }
    timestamp.to_string()
}
