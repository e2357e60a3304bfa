//! Color theme and styling definitions using ratatui colors
//!
//! This module provides color themes for the dashboard using ratatui's
//! color system directly to avoid unnecessary abstractions. The per-pad
//! palette matches the device web UI's chart colors.

use crate::model::PAD_COUNT;
use ratatui::style::{Color, Style};

/// Color theme for dashboard UI elements
#[derive(Debug, Clone)]
pub struct ColorTheme {
    /// One bar color per touch pad
    pub pad_colors: [Color; PAD_COUNT],

    /// Header line at the top of the dashboard
    pub header: Style,

    /// Table column headings
    pub table_header: Style,

    /// Placeholder row shown while the log is empty
    pub placeholder: Style,

    /// Indicator cell while a (simulated) touch is active
    pub indicator_active: Style,

    /// Indicator cell at rest
    pub indicator_idle: Style,

    /// Success notification banner
    pub banner_success: Style,

    /// Error notification banner
    pub banner_error: Style,

    /// Status line background
    pub status_bg: Color,

    /// Status line text
    pub status_fg: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            pad_colors: [
                Color::Rgb(255, 99, 132),
                Color::Rgb(54, 162, 235),
                Color::Rgb(255, 206, 86),
                Color::Rgb(75, 192, 192),
                Color::Rgb(153, 102, 255),
                Color::Rgb(255, 159, 64),
                Color::Rgb(255, 99, 132),
            ],
            header: Style::default().fg(Color::White).bg(Color::Blue),
            table_header: Style::default().fg(Color::LightCyan),
            placeholder: Style::default().fg(Color::DarkGray),
            indicator_active: Style::default().fg(Color::Black).bg(Color::LightGreen),
            indicator_idle: Style::default().fg(Color::DarkGray),
            banner_success: Style::default().fg(Color::White).bg(Color::Rgb(40, 167, 69)),
            banner_error: Style::default().fg(Color::White).bg(Color::Rgb(220, 53, 69)),
            status_bg: Color::Blue,
            status_fg: Color::White,
        }
    }
}

impl ColorTheme {
    /// Create a monochrome theme for terminals without color support
    pub fn monochrome() -> Self {
        Self {
            pad_colors: [Color::White; PAD_COUNT],
            header: Style::default().fg(Color::Black).bg(Color::White),
            table_header: Style::default().fg(Color::White),
            placeholder: Style::default().fg(Color::Gray),
            indicator_active: Style::default().fg(Color::Black).bg(Color::White),
            indicator_idle: Style::default().fg(Color::Gray),
            banner_success: Style::default().fg(Color::Black).bg(Color::White),
            banner_error: Style::default().fg(Color::White).bg(Color::Black),
            status_bg: Color::Black,
            status_fg: Color::White,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.status_fg, Color::White);
        assert_eq!(theme.status_bg, Color::Blue);

        // Web UI palette carries over; pads 1 and 7 share a color
        assert_eq!(theme.pad_colors[0], Color::Rgb(255, 99, 132));
        assert_eq!(theme.pad_colors[0], theme.pad_colors[6]);

        // Notification banner colors match the web UI's success/error styling
        assert_eq!(theme.banner_success.bg, Some(Color::Rgb(40, 167, 69)));
        assert_eq!(theme.banner_error.bg, Some(Color::Rgb(220, 53, 69)));
    }

    #[test]
    fn test_monochrome_theme() {
        let theme = ColorTheme::monochrome();
        assert_eq!(theme.status_fg, Color::White);
        assert_eq!(theme.status_bg, Color::Black);
        assert!(theme.pad_colors.iter().all(|c| *c == Color::White));
    }
}
