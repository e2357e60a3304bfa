//! touchdash - Terminal Dashboard for ESP32 Touch Sensor Logs
//!
//! Polls the device's `/api/touch-logs` endpoint and renders the event log
//! as a live terminal dashboard.

use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    // Parse command-line arguments
    let matches = Command::new("touchdash")
        .version(touchdash::VERSION)
        .about("A terminal dashboard for ESP32 touch-sensor event logs")
        .long_about(
            "touchdash polls an ESP32 touch-sensor logger over HTTP and renders \
             the event log as a table, a per-pad activity chart, and simulated \
             touch indicators. Press r to refresh, e to export CSV, q to quit.",
        )
        .arg(
            Arg::new("url")
                .help("Base URL of the device, e.g. http://192.168.4.1")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("interval")
                .long("interval")
                .value_name("MS")
                .help("Poll cadence in milliseconds")
                .default_value("2000"),
        )
        .arg(
            Arg::new("export-dir")
                .long("export-dir")
                .value_name("PATH")
                .help("Directory CSV exports are written to")
                .default_value("."),
        )
        .get_matches();

    let base_url = matches
        .get_one::<String>("url")
        .expect("url argument is required");

    let interval_ms: u64 = matches
        .get_one::<String>("interval")
        .expect("interval has a default")
        .parse()
        .map_err(|_| anyhow::anyhow!("--interval must be a number of milliseconds"))?;
    if interval_ms == 0 {
        anyhow::bail!("--interval must be greater than zero");
    }

    let export_dir = PathBuf::from(
        matches
            .get_one::<String>("export-dir")
            .expect("export-dir has a default"),
    );
    if !export_dir.is_dir() {
        anyhow::bail!("Export directory does not exist: {}", export_dir.display());
    }

    // Initialize the Application and start the dashboard loop
    use touchdash::ui::TerminalUI;
    use touchdash::{Application, HttpLogSource};

    let source = Arc::new(HttpLogSource::new(base_url)?);
    let ui_renderer = Box::new(TerminalUI::new()?);
    let mut app = Application::new(
        source,
        ui_renderer,
        Duration::from_millis(interval_ms),
        export_dir,
    );

    app.run().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!touchdash::VERSION.is_empty());
    }
}
