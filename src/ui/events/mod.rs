//! Event handling
//!
//! Translates key input into state changes:
//! - Tab / Shift+Tab cycle through the five tabs
//! - Up / Down move the field focus within a tab
//! - printable characters edit the focused field (with paste batching)
//! - Enter dispatches the active tab's action
//! - Ctrl+Y copies the active tab's status text, Esc quits
//!
//! State lives behind `Arc<RwLock<AppState>>` because background request
//! tasks write into it; locks are held only long enough to read or mutate.

mod form;
mod helpers;

pub use helpers::log_debug;

use crate::api;
use crate::state::AppState;
use crate::types::Tab;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    /// Poll for one key event and apply it.
    pub fn handle_events(&mut self, state: Arc<RwLock<AppState>>, base_url: String) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => self.should_quit = true,

                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.should_quit = true;
                    }

                    KeyCode::Tab => {
                        state.write().unwrap().next_tab();
                    }
                    KeyCode::BackTab => {
                        state.write().unwrap().prev_tab();
                    }

                    KeyCode::Up => {
                        state.write().unwrap().focus_prev();
                    }
                    KeyCode::Down => {
                        state.write().unwrap().focus_next();
                    }

                    KeyCode::Enter => {
                        dispatch_submit(state.clone(), base_url);
                    }

                    KeyCode::Backspace => {
                        form::handle_backspace(&state);
                    }

                    // Ctrl+U: clear the focused field
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        form::handle_clear_field(&state);
                    }

                    // Ctrl+Y: copy the status text to the clipboard
                    KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        helpers::yank_status(&state);
                    }

                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        form::handle_char_input(&state, c);
                    }

                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// Dispatch the active tab's action as a background request.
fn dispatch_submit(state: Arc<RwLock<AppState>>, base_url: String) {
    let tab = state.read().unwrap().active_tab;
    match tab {
        Tab::Create => api::submit_create(state, base_url),
        Tab::Roster => api::submit_roster(state, base_url),
        Tab::Attendance => api::submit_attendance(state, base_url),
        Tab::Progress => api::submit_progress(state, base_url),
        Tab::Update => api::submit_update(state, base_url),
    }
}
