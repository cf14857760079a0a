//! Focused-field editing
//!
//! Character input, backspace, and clear all target the focused field of the
//! active tab. Tabs without fields (the roster) ignore text input.

use crate::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Append typed characters to the focused field.
pub fn handle_char_input(state: &Arc<RwLock<AppState>>, initial_char: char) {
    let (batch, _count) = collect_paste_batch(initial_char);

    let mut s = state.write().unwrap();
    if let Some(value) = s.focused_value_mut() {
        value.push_str(&batch);
    }
}

/// Delete the last character of the focused field.
pub fn handle_backspace(state: &Arc<RwLock<AppState>>) {
    let mut s = state.write().unwrap();
    if let Some(value) = s.focused_value_mut() {
        value.pop();
    }
}

/// Clear the focused field (Ctrl+U).
pub fn handle_clear_field(state: &Arc<RwLock<AppState>>) {
    let mut s = state.write().unwrap();
    if let Some(value) = s.focused_value_mut() {
        value.clear();
    }
}

/// Collect a batch of characters for paste support
///
/// When a character is typed, this function checks for any immediately
/// available character events and batches them together. This enables fast
/// paste operations in terminals.
fn collect_paste_batch(initial_char: char) -> (String, usize) {
    let mut chars = vec![initial_char];

    // Drain any immediately available character events
    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        if let Ok(Event::Key(next_key)) = event::read() {
            match next_key.code {
                KeyCode::Char(next_c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    chars.push(next_c);
                }
                _ => {
                    // Non-character or control key, stop batching
                    break;
                }
            }
        } else {
            break;
        }
    }

    let count = chars.len();
    let batch_str: String = chars.into_iter().collect();
    (batch_str, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tab;

    fn shared(state: AppState) -> Arc<RwLock<AppState>> {
        Arc::new(RwLock::new(state))
    }

    #[test]
    fn test_backspace_pops_focused_field() {
        let mut app_state = AppState::default();
        app_state.create.name = "Anaa".to_string();

        let state = shared(app_state);
        handle_backspace(&state);

        assert_eq!(state.read().unwrap().create.name, "Ana");
    }

    #[test]
    fn test_backspace_on_empty_field_is_noop() {
        let state = shared(AppState::default());
        handle_backspace(&state);
        assert!(state.read().unwrap().create.name.is_empty());
    }

    #[test]
    fn test_clear_field_only_touches_focused_field() {
        let mut app_state = AppState::default();
        app_state.active_tab = Tab::Attendance;
        app_state.attendance.email = "ana@mail.com".to_string();
        app_state.attendance.focus = 1;

        let state = shared(app_state);
        handle_clear_field(&state);

        let s = state.read().unwrap();
        assert_eq!(s.attendance.count, "");
        assert_eq!(s.attendance.email, "ana@mail.com");
    }

    #[test]
    fn test_editing_ignored_on_roster_tab() {
        let mut app_state = AppState::default();
        app_state.active_tab = Tab::Roster;

        let state = shared(app_state);
        handle_backspace(&state);
        handle_clear_field(&state);
        // No field to edit, nothing to assert beyond not panicking
    }
}
