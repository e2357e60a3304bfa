//! Background poll worker.
//!
//! Runs on its own tokio task and owns the fetch cadence: a periodic ticker
//! (first tick fires immediately, giving the startup fetch) plus a command
//! channel for manual refreshes and shutdown. Periodic and manual fetches go
//! through the same path, so requests are serialized and responses reach the
//! coordinator in completion order.

use crate::client::LogSource;
use crate::poll::protocol::{PollCommand, PollResponse};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{Receiver, Sender};
use tokio::time::MissedTickBehavior;

/// Default fetch cadence, matching the device web UI.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Run the poll worker until `Shutdown` is received or the coordinator goes away.
///
/// Fetch failures are forwarded as [`PollResponse::Failed`] and never stop
/// the loop; there is no backoff or retry limit.
pub async fn poll_worker_loop(
    mut rx: Receiver<PollCommand>,
    tx: Sender<PollResponse>,
    source: Arc<dyn LogSource>,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !fetch_and_forward(&tx, source.as_ref()).await {
                    break;
                }
            }
            cmd = rx.recv() => match cmd {
                Some(PollCommand::RefreshNow) => {
                    if !fetch_and_forward(&tx, source.as_ref()).await {
                        break;
                    }
                }
                Some(PollCommand::Shutdown) | None => break,
            },
        }
    }

    log::debug!("poll worker stopped");
}

/// Fetch once and forward the outcome. Returns false when the coordinator
/// side of the channel has been dropped.
async fn fetch_and_forward(tx: &Sender<PollResponse>, source: &dyn LogSource) -> bool {
    let response = match source.fetch_log().await {
        Ok(events) => PollResponse::LogLoaded(events),
        Err(error) => {
            log::error!("Error loading touch logs: {}", error);
            PollResponse::Failed(error)
        }
    };

    tx.send(response).await.is_ok()
}
