//! Reusable UI components
//!
//! Header, footer, and the per-tab status area shared by every tab.

use super::styling::{self, SPINNER};
use crate::types::ActionState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the application header with the configured base URL
pub fn render_header(frame: &mut Frame, area: Rect, base_url: &str) {
    let header = Paragraph::new(format!("tatame tui - {base_url}"))
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer_text =
        "Tab:Next tab ↑/↓:Field Enter:Submit Ctrl+U:Clear field Ctrl+Y:Copy status Esc:Quit";

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Render the status area for one tab's action.
///
/// `idle_hint` is shown before the first submit; afterwards the area holds
/// the spinner, the success text, or the failure text.
pub fn render_status(
    frame: &mut Frame,
    area: Rect,
    status: &ActionState,
    spinner_index: usize,
    idle_hint: &str,
) {
    let (text, style) = match status {
        ActionState::Idle => (
            idle_hint.to_string(),
            Style::default().fg(styling::unfocused_border()),
        ),
        ActionState::Busy => (
            format!("{} Working...", SPINNER[spinner_index]),
            Style::default().fg(Color::Yellow),
        ),
        ActionState::Done(message) => (message.clone(), Style::default().fg(Color::Green)),
        ActionState::Failed(message) => (message.clone(), Style::default().fg(Color::Red)),
    };

    let status_widget = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Status"));

    frame.render_widget(status_widget, area);
}
