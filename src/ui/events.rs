//! User-facing commands produced by the input layer.

/// Commands a renderer can emit from keyboard input.
///
/// The dashboard is deliberately small: everything else (polling, pruning,
/// rendering) happens on the coordinator's own cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UICommand {
    /// Exit the dashboard and restore the terminal.
    Quit,
    /// Fetch the event log immediately, outside the periodic cadence.
    Refresh,
    /// Export the current event log to CSV.
    Export,
}
