//! Event-handling helpers: clipboard yank and debug logging.

use crate::state::AppState;
use arboard::Clipboard;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, RwLock};

/// Copy the active tab's status text to the system clipboard.
pub fn yank_status(state: &Arc<RwLock<AppState>>) {
    let text = {
        let s = state.read().unwrap();
        s.active_status().text().to_string()
    };

    if text.is_empty() {
        log_debug("Nothing to yank");
        return;
    }

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => log_debug("Yanked status text"),
            Err(e) => log_debug(&format!("Failed to copy to clipboard: {e}")),
        },
        Err(e) => log_debug(&format!("Failed to access clipboard: {e}")),
    }
}

/// Log debug message to /tmp/tatame-tui.log
pub fn log_debug(msg: &str) {
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/tatame-tui.log")
        .and_then(|mut f| writeln!(f, "{msg}"));
}
