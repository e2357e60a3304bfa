//! Terminal UI module with ratatui
//!
//! This module provides the dashboard interface for touchdash using the
//! ratatui library. It follows a trait-based architecture with a command
//! pattern for input handling so the application loop can be tested against
//! a mock renderer.

pub mod events;
pub mod renderer;
pub mod state;
pub mod terminal;
pub mod theme;

// Re-export public API
pub use events::UICommand;
pub use ratatui::style::{Color, Style};
pub use renderer::UIRenderer;
pub use state::{DashboardState, Notification, Severity};
pub use terminal::TerminalUI;
pub use theme::ColorTheme;

#[cfg(test)]
pub use renderer::tests::MockUIRenderer;
