//! UI renderer trait and test double
//!
//! This module defines the UIRenderer trait for drawing the dashboard and
//! translating keyboard input into commands in an event-driven architecture.

use crate::error::Result;
use crate::ui::{DashboardState, UICommand};
use std::time::Duration;

/// Core trait for UI rendering and input handling
pub trait UIRenderer {
    /// Render the current dashboard state to the terminal
    ///
    /// This method should:
    /// - Redraw the event table, bar chart, indicators, and status area
    /// - Overlay any pending notification banners
    /// - Handle terminal resizing
    fn render(&mut self, state: &DashboardState) -> Result<()>;

    /// Handle user input and return the next command
    ///
    /// This method should:
    /// - Block until user input or timeout
    /// - Parse key combinations into UICommands
    /// - Return None on timeout so the caller can keep its render cadence
    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<UICommand>>;

    /// Initialize the terminal UI (raw mode, alternate screen)
    fn initialize(&mut self) -> Result<()>;

    /// Clean up and restore terminal state
    fn cleanup(&mut self) -> Result<()>;

    /// Get current terminal dimensions
    fn get_terminal_size(&self) -> Result<(u16, u16)>; // (width, height)
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Mock UI renderer for testing
    ///
    /// This mock allows tests to:
    /// - Verify render calls were made
    /// - Simulate user input sequences
    /// - Drive the application loop without a terminal
    pub struct MockUIRenderer {
        pub render_count: usize,
        pub terminal_size: (u16, u16),
        pub input_sequence: VecDeque<UICommand>,
        pub is_initialized: bool,
    }

    impl Default for MockUIRenderer {
        fn default() -> Self {
            Self::new()
        }
    }

    impl MockUIRenderer {
        /// Create a new mock renderer with default settings
        pub fn new() -> Self {
            Self {
                render_count: 0,
                terminal_size: (80, 24),
                input_sequence: VecDeque::new(),
                is_initialized: false,
            }
        }

        /// Add a command to the input sequence for testing
        pub fn add_input(&mut self, command: UICommand) {
            self.input_sequence.push_back(command);
        }
    }

    impl UIRenderer for MockUIRenderer {
        fn render(&mut self, _state: &DashboardState) -> Result<()> {
            self.render_count += 1;
            Ok(())
        }

        fn handle_input(&mut self, _timeout: Option<Duration>) -> Result<Option<UICommand>> {
            Ok(self.input_sequence.pop_front())
        }

        fn initialize(&mut self) -> Result<()> {
            self.is_initialized = true;
            Ok(())
        }

        fn cleanup(&mut self) -> Result<()> {
            self.is_initialized = false;
            Ok(())
        }

        fn get_terminal_size(&self) -> Result<(u16, u16)> {
            Ok(self.terminal_size)
        }
    }

    #[test]
    fn test_mock_renderer_basic() {
        let mut renderer = MockUIRenderer::new();
        let state = DashboardState::new("http://device/api/touch-logs");

        // Test initialization
        assert!(!renderer.is_initialized);
        renderer.initialize().unwrap();
        assert!(renderer.is_initialized);

        // Test rendering
        assert_eq!(renderer.render_count, 0);
        renderer.render(&state).unwrap();
        assert_eq!(renderer.render_count, 1);

        // Test input simulation
        renderer.add_input(UICommand::Refresh);
        let cmd = renderer.handle_input(None).unwrap();
        assert_eq!(cmd, Some(UICommand::Refresh));

        // Test terminal size
        assert_eq!(renderer.get_terminal_size().unwrap(), (80, 24));

        // Test cleanup
        renderer.cleanup().unwrap();
        assert!(!renderer.is_initialized);
    }

    #[test]
    fn test_mock_renderer_input_sequence() {
        let mut renderer = MockUIRenderer::new();

        renderer.add_input(UICommand::Refresh);
        renderer.add_input(UICommand::Export);
        renderer.add_input(UICommand::Quit);

        // Verify they come out in order
        assert_eq!(renderer.handle_input(None).unwrap(), Some(UICommand::Refresh));
        assert_eq!(renderer.handle_input(None).unwrap(), Some(UICommand::Export));
        assert_eq!(renderer.handle_input(None).unwrap(), Some(UICommand::Quit));
        assert_eq!(renderer.handle_input(None).unwrap(), None);
    }
}
