//! Application orchestration layer
//!
//! This module provides minimal coordination between the poll worker, the
//! dashboard state, and the UI renderer. It avoids duplicating state that
//! already lives in DashboardState: each loop iteration handles input, drains
//! worker responses, prunes expired banners and indicators, and renders.

use crate::client::LogSource;
use crate::error::{Result, TouchdashError};
use crate::export::export_csv;
use crate::poll::{poll_worker_loop, PollCommand, PollResponse};
use crate::ui::{DashboardState, Severity, UICommand, UIRenderer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Application orchestrator - wires the poll worker to the renderer
pub struct Application {
    source: Arc<dyn LogSource>,
    ui_renderer: Box<dyn UIRenderer>,
    poll_interval: Duration,
    export_dir: PathBuf,
}

impl Application {
    /// Create the application from its wired components
    pub fn new(
        source: Arc<dyn LogSource>,
        ui_renderer: Box<dyn UIRenderer>,
        poll_interval: Duration,
        export_dir: PathBuf,
    ) -> Self {
        Self {
            source,
            ui_renderer,
            poll_interval,
            export_dir,
        }
    }

    /// Run the application until the user quits.
    ///
    /// The terminal is restored even when the loop exits with an error.
    pub async fn run(&mut self) -> Result<()> {
        self.ui_renderer.initialize()?;
        let result = self.run_loop().await;
        let cleanup = self.ui_renderer.cleanup();
        result.and(cleanup)
    }

    async fn run_loop(&mut self) -> Result<()> {
        let mut state = DashboardState::new(self.source.endpoint().to_string());

        // The worker owns the 2-second cadence; its first tick fires
        // immediately, giving the startup fetch.
        let (cmd_tx, cmd_rx) = mpsc::channel(8);
        let (resp_tx, mut resp_rx) = mpsc::channel(8);
        let worker = tokio::spawn(poll_worker_loop(
            cmd_rx,
            resp_tx,
            Arc::clone(&self.source),
            self.poll_interval,
        ));

        let mut rng = StdRng::from_entropy();
        let mut running = true;
        while running {
            match self
                .ui_renderer
                .handle_input(Some(Duration::from_millis(50)))
            {
                Ok(Some(command)) => {
                    running = self.execute_command(command, &mut state, &cmd_tx).await?;
                }
                Ok(None) => {
                    // No input this tick
                }
                Err(e) => {
                    log::error!("Input error: {}", e);
                    break;
                }
            }

            // Apply whatever the worker produced since the last iteration, in
            // arrival order; a late response simply overwrites state last.
            while let Ok(response) = resp_rx.try_recv() {
                Self::handle_response(response, &mut state, &mut rng);
            }

            state.prune(Instant::now());
            self.ui_renderer.render(&state)?;

            // Brief pause
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let _ = cmd_tx.send(PollCommand::Shutdown).await;
        let _ = worker.await;
        Ok(())
    }

    /// Execute a command - returns false if should quit
    async fn execute_command(
        &mut self,
        command: UICommand,
        state: &mut DashboardState,
        cmd_tx: &mpsc::Sender<PollCommand>,
    ) -> Result<bool> {
        match command {
            UICommand::Quit => Ok(false),

            UICommand::Refresh => {
                cmd_tx
                    .send(PollCommand::RefreshNow)
                    .await
                    .map_err(|_| TouchdashError::other("poll worker unavailable"))?;
                Ok(true)
            }

            UICommand::Export => {
                let now = Instant::now();
                match export_csv(&state.events, &self.export_dir) {
                    Ok(path) => state.notify(
                        format!("CSV exported successfully: {}", path.display()),
                        Severity::Success,
                        now,
                    ),
                    Err(TouchdashError::NoData) => {
                        state.notify("No data to export", Severity::Error, now);
                    }
                    Err(error) => {
                        log::error!("CSV export failed: {}", error);
                        state.notify(format!("Export failed: {}", error), Severity::Error, now);
                    }
                }
                Ok(true)
            }
        }
    }

    /// Apply one worker response to the dashboard state.
    ///
    /// A successful load replaces the log and runs one simulated indicator
    /// cycle; a failure leaves prior data untouched and raises a banner. The
    /// fetch error itself is logged by the worker.
    fn handle_response(response: PollResponse, state: &mut DashboardState, rng: &mut impl Rng) {
        let now = Instant::now();
        match response {
            PollResponse::LogLoaded(events) => {
                state.apply_log(events);
                state.simulate_indicators(rng, now);
            }
            PollResponse::Failed(_) => {
                state.record_failure();
                state.notify(
                    "Error loading logs. Please check connection.",
                    Severity::Error,
                    now,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TouchEvent;
    use crate::ui::MockUIRenderer;
    use async_trait::async_trait;
    use rand_chacha::ChaCha8Rng;

    struct StaticSource {
        events: Vec<TouchEvent>,
    }

    #[async_trait]
    impl LogSource for StaticSource {
        async fn fetch_log(&self) -> Result<Vec<TouchEvent>> {
            Ok(self.events.clone())
        }

        fn endpoint(&self) -> &str {
            "static://test"
        }
    }

    fn sample_event() -> TouchEvent {
        TouchEvent {
            timestamp: "2024-01-01 10:00:00".to_string(),
            pad: "Touch_1".to_string(),
            user: "User_1".to_string(),
        }
    }

    #[tokio::test]
    async fn test_run_exits_on_quit_and_restores_ui() {
        let mut renderer = MockUIRenderer::new();
        renderer.add_input(UICommand::Quit);

        let mut app = Application::new(
            Arc::new(StaticSource { events: vec![] }),
            Box::new(renderer),
            Duration::from_millis(10),
            std::env::temp_dir(),
        );

        app.run().await.unwrap();
    }

    #[tokio::test]
    async fn test_export_on_empty_log_raises_error_banner() {
        let mut app = Application::new(
            Arc::new(StaticSource { events: vec![] }),
            Box::new(MockUIRenderer::new()),
            Duration::from_millis(10),
            std::env::temp_dir(),
        );

        let mut state = DashboardState::new("static://test");
        let (cmd_tx, _cmd_rx) = mpsc::channel(1);

        let keep_running = app
            .execute_command(UICommand::Export, &mut state, &cmd_tx)
            .await
            .unwrap();
        assert!(keep_running);

        let banners = state.notifications();
        assert_eq!(banners.len(), 1);
        assert_eq!(banners[0].message, "No data to export");
        assert_eq!(banners[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn test_refresh_forwards_to_worker() {
        let mut app = Application::new(
            Arc::new(StaticSource { events: vec![] }),
            Box::new(MockUIRenderer::new()),
            Duration::from_millis(10),
            std::env::temp_dir(),
        );

        let mut state = DashboardState::new("static://test");
        let (cmd_tx, mut cmd_rx) = mpsc::channel(1);

        app.execute_command(UICommand::Refresh, &mut state, &cmd_tx)
            .await
            .unwrap();
        assert_eq!(cmd_rx.recv().await, Some(PollCommand::RefreshNow));
    }

    #[test]
    fn test_failed_poll_keeps_prior_data() {
        let mut state = DashboardState::new("static://test");
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        Application::handle_response(
            PollResponse::LogLoaded(vec![sample_event()]),
            &mut state,
            &mut rng,
        );
        assert_eq!(state.total_events(), 1);
        assert!(state.is_online());

        Application::handle_response(
            PollResponse::Failed(TouchdashError::network("connection refused")),
            &mut state,
            &mut rng,
        );
        assert_eq!(state.total_events(), 1);
        assert_eq!(state.counts.get(0), 1);
        assert!(!state.is_online());
        assert_eq!(
            state.notifications().last().unwrap().message,
            "Error loading logs. Please check connection."
        );
    }
}
