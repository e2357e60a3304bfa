//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using
//! ratatui for a cross-platform terminal dashboard. It draws the same four
//! surfaces as the device web UI: event table, per-pad bar chart, indicator
//! row, and status info, plus stacked notification banners.

use crate::error::Result;
use crate::model::{PAD_COUNT, PAD_LABELS};
use crate::ui::{ColorTheme, DashboardState, Severity, UICommand, UIRenderer};
use ratatui::crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Row, Table},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Terminal UI implementation with ratatui backend
///
/// This implementation focuses purely on rendering and input handling.
/// Data management is handled by Application coordinating the poll worker
/// and DashboardState.
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Convert key events to UICommands
    fn key_to_command(&self, key: KeyCode, modifiers: KeyModifiers) -> Option<UICommand> {
        match (key, modifiers) {
            (KeyCode::Char('q'), KeyModifiers::NONE)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL)
            | (KeyCode::Esc, _) => Some(UICommand::Quit),

            (KeyCode::Char('r'), KeyModifiers::NONE) => Some(UICommand::Refresh),
            (KeyCode::Char('e'), KeyModifiers::NONE) => Some(UICommand::Export),

            _ => None,
        }
    }
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, state: &DashboardState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            let theme = &self.theme;
            let now = Instant::now();

            terminal.draw(move |frame| {
                draw_dashboard(frame, state, theme, now);
            })?;
        }
        Ok(())
    }

    fn handle_input(&mut self, timeout: Option<Duration>) -> Result<Option<UICommand>> {
        let timeout_duration = timeout.unwrap_or(Duration::from_millis(100));

        if event::poll(timeout_duration)? {
            if let Event::Key(key_event) = event::read()? {
                return Ok(self.key_to_command(key_event.code, key_event.modifiers));
            }
        }

        Ok(None)
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode()?;
            execute!(io::stdout(), LeaveAlternateScreen)?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = ratatui::crossterm::terminal::size()?;
        Ok((cols, rows))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Draw one complete dashboard frame.
///
/// Kept as a free function so render tests can drive it through a
/// `TestBackend` without a real terminal.
pub(crate) fn draw_dashboard(
    frame: &mut Frame,
    state: &DashboardState,
    theme: &ColorTheme,
    now: Instant,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(8),    // table + chart
            Constraint::Length(3), // indicator row
            Constraint::Length(1), // status line
        ])
        .split(frame.size());

    render_header(frame, chunks[0], state, theme);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_table(frame, body[0], state, theme);
    render_chart(frame, body[1], state, theme);
    render_indicators(frame, chunks[2], state, theme, now);
    render_status(frame, chunks[3], state, theme);
    render_notifications(frame, state, theme);
}

fn render_header(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &ColorTheme) {
    let connection = if state.is_online() { "online" } else { "offline" };
    let text = format!(
        " ESP32 Touch Sensor Logger | {} | {}",
        state.endpoint(),
        connection
    );
    frame.render_widget(Paragraph::new(text).style(theme.header), area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &ColorTheme) {
    let block = Block::default().borders(Borders::ALL).title("Touch Event Logs");

    let rows: Vec<Row> = if state.events.is_empty() {
        vec![Row::new(vec!["No touch events recorded yet"]).style(theme.placeholder)]
    } else {
        state
            .events
            .iter()
            .map(|event| {
                Row::new(vec![
                    event.timestamp.clone(),
                    event.pad.clone(),
                    event.user.clone(),
                ])
            })
            .collect()
    };

    let widths = [
        Constraint::Length(20),
        Constraint::Length(10),
        Constraint::Min(8),
    ];
    let table = Table::new(rows, widths)
        .header(Row::new(vec!["Timestamp", "Touch Pad", "User"]).style(theme.table_header))
        .block(block);

    frame.render_widget(table, area);
}

fn render_chart(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &ColorTheme) {
    let bars: Vec<Bar> = PAD_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            Bar::default()
                .value(state.counts.get(i))
                .label(Line::from(*label))
                .style(Style::default().fg(theme.pad_colors[i]))
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Touch Events by Sensor"),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(7)
        .bar_gap(1)
        .max(state.counts.max().max(1));

    frame.render_widget(chart, area);
}

fn render_indicators(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    theme: &ColorTheme,
    now: Instant,
) {
    let mut spans: Vec<Span> = Vec::with_capacity(PAD_COUNT * 2);
    for (i, label) in PAD_LABELS.iter().enumerate() {
        let style = if state.indicator_active(i, now) {
            theme.indicator_active
        } else {
            theme.indicator_idle
        };
        spans.push(Span::styled(format!(" {} ", label), style));
        spans.push(Span::raw(" "));
    }

    let block = Block::default().borders(Borders::ALL).title("Live Touch Status");
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_status(frame: &mut Frame, area: Rect, state: &DashboardState, theme: &ColorTheme) {
    let status_text = format!(
        " Total events: {} | Last event: {} | r: refresh  e: export  q: quit",
        state.total_events(),
        state.last_event_label().unwrap_or("--"),
    );

    let status_style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
    frame.render_widget(Paragraph::new(status_text).style(status_style), area);
}

/// Overlay pending notification banners at the top right, oldest first.
/// Banners stack without dedup; every entry is drawn independently.
fn render_notifications(frame: &mut Frame, state: &DashboardState, theme: &ColorTheme) {
    let area = frame.size();

    for (i, notification) in state.notifications().iter().enumerate() {
        let y = area.y + 1 + i as u16;
        if y + 1 >= area.bottom() {
            break; // out of vertical space; remaining banners expire on their own
        }

        let width = (notification.message.len() as u16 + 2).min(area.width.saturating_sub(2));
        let banner = Rect {
            x: area.right().saturating_sub(width + 1),
            y,
            width,
            height: 1,
        };

        let style = match notification.severity {
            Severity::Success => theme.banner_success,
            Severity::Error => theme.banner_error,
        };

        frame.render_widget(Clear, banner);
        frame.render_widget(
            Paragraph::new(format!(" {} ", notification.message)).style(style),
            banner,
        );
    }
}
