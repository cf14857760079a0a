//! Per-tab rendering
//!
//! The tab bar plus one body pane per tab: a field form with a status area,
//! or the roster list.

use super::components::render_status;
use super::styling::{self, belt_color};
use crate::state::{AppState, AttendanceForm, CreateForm, ProgressForm, UpdateForm};
use crate::types::{ActionState, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the tab bar showing [ Create Student ] [ Roster ] ...
///
/// The active tab is highlighted; a tab with a request in flight gets a
/// `(...)` marker.
pub fn render_tab_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let separator_style = Style::default().fg(Color::DarkGray);
    let mut spans = vec![Span::styled("[ ", separator_style)];

    for (idx, tab) in Tab::ALL.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" ] [ ", separator_style));
        }

        let label = if state.status_for(*tab).is_busy() {
            format!("{} (...)", tab.title())
        } else {
            tab.title().to_string()
        };

        let style = if *tab == state.active_tab {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(styling::default_fg())
        };

        spans.push(Span::styled(label, style));
    }

    spans.push(Span::styled(" ]", separator_style));

    let tab_bar = Paragraph::new(Line::from(spans));
    frame.render_widget(tab_bar, area);
}

/// Render the body of the active tab
pub fn render_active_tab(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    match state.active_tab {
        Tab::Create => render_form(
            frame,
            area,
            &CreateForm::LABELS,
            &state.create.values(),
            state.create.focus,
            &state.create.status,
            spinner_index,
            "Press [Enter] to create the student",
        ),
        Tab::Roster => render_roster(frame, area, state, spinner_index),
        Tab::Attendance => render_form(
            frame,
            area,
            &AttendanceForm::LABELS,
            &state.attendance.values(),
            state.attendance.focus,
            &state.attendance.status,
            spinner_index,
            "Press [Enter] to log the classes",
        ),
        Tab::Progress => render_form(
            frame,
            area,
            &ProgressForm::LABELS,
            &state.progress.values(),
            0,
            &state.progress.status,
            spinner_index,
            "Press [Enter] to query progress",
        ),
        Tab::Update => render_form(
            frame,
            area,
            &UpdateForm::LABELS,
            &state.update.values(),
            state.update.focus,
            &state.update.status,
            spinner_index,
            "Press [Enter] to update the student",
        ),
    }
}

// ============================================================================
// Private Helper Functions
// ============================================================================

/// Render a column of labeled text fields with the status area below.
#[allow(clippy::too_many_arguments)]
fn render_form(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    values: &[&str],
    focus: usize,
    status: &ActionState,
    spinner_index: usize,
    idle_hint: &str,
) {
    let mut constraints: Vec<Constraint> = labels.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(3));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, (label, value)) in labels.iter().zip(values.iter()).enumerate() {
        let focused = idx == focus;

        let border_color = if focused {
            styling::focused_border()
        } else {
            styling::unfocused_border()
        };

        // Show a cursor on the focused field
        let text = if focused {
            format!("{value}_")
        } else {
            (*value).to_string()
        };

        let field = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {label} ")),
        );

        frame.render_widget(field, chunks[idx]);
    }

    render_status(frame, chunks[labels.len()], status, spinner_index, idle_hint);
}

/// Render the roster list with the status area below.
fn render_roster(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let rows = &state.roster.rows;

    if rows.is_empty() {
        let empty = Paragraph::new("No students loaded\n\nPress [Enter] to fetch the roster")
            .block(Block::default().borders(Borders::ALL).title("Students"));
        frame.render_widget(empty, chunks[0]);
    } else {
        let header = ListItem::new(Line::from(Span::styled(
            format!(
                "{:<20} {:<28} {:<10} {}",
                "Name", "Email", "Belt", "Birth date"
            ),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let mut items = vec![header];
        for student in rows {
            let line = Line::from(vec![
                Span::raw(format!("{:<20} ", student.nome)),
                Span::raw(format!("{:<28} ", student.email)),
                Span::styled(
                    format!("{:<10} ", student.faixa),
                    Style::default()
                        .fg(belt_color(&student.faixa))
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(student.data_nascimento.clone()),
            ]);
            items.push(ListItem::new(line));
        }

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Students ({})", rows.len())),
        );

        frame.render_widget(list, chunks[0]);
    }

    render_status(
        frame,
        chunks[1],
        &state.roster.status,
        spinner_index,
        "Press [Enter] to fetch the roster",
    );
}
