//! Protocol definitions shared between the coordinator and the poll worker.

use crate::error::TouchdashError;
use crate::model::TouchEvent;

/// Commands sent from the coordinator to the poll worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollCommand {
    /// Fetch immediately, outside the periodic cadence (manual refresh).
    RefreshNow,
    /// Stop the worker loop deterministically.
    Shutdown,
}

/// Results emitted by the poll worker back to the coordinator.
///
/// Responses are applied in channel arrival order; a `Failed` response never
/// disturbs previously loaded state.
#[derive(Debug)]
pub enum PollResponse {
    /// A successful fetch carrying the full replacement event log.
    LogLoaded(Vec<TouchEvent>),
    /// A fetch that failed; the cadence continues regardless.
    Failed(TouchdashError),
}
