//! # touchdash - Terminal Dashboard for ESP32 Touch Sensor Logs
//!
//! A terminal dashboard that polls an ESP32 touch-sensor logger's REST
//! endpoint and renders the event log as a table, a per-pad bar chart, and a
//! row of simulated activity indicators.
//!
//! ## Features
//!
//! - **Live polling**: Full event log fetched on a fixed 2-second cadence
//! - **Derived views**: Per-pad histogram and status info recomputed each poll
//! - **CSV export**: One-key export of the current log, fields quoted
//! - **Resilient**: A failed poll never stops the cadence or loses data
//!
//! ## Architecture
//!
//! The library is organized into focused modules:
//!
//! - [`error`] - Centralized error types and handling
//! - [`model`] - Touch event records and per-pad aggregation
//! - [`client`] - Log source abstraction and HTTP implementation
//! - [`poll`] - Background poll worker and its channel protocol
//! - [`export`] - CSV serialization of the event log
//! - [`ui`] - Terminal user interface components
//! - [`app`] - Application core and component coordination

// Core modules
pub mod error;
pub mod model;

// Data plane
pub mod client;
pub mod export;
pub mod poll;

// Presentation and coordination
pub mod app;
pub mod ui;

// Re-export commonly used types for convenience
pub use error::{Result, TouchdashError};

// Public API surface for external usage
pub use app::Application;
pub use client::{HttpLogSource, LogSource};
pub use model::{PadCounts, TouchEvent, PAD_COUNT};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
