//! Rendering for the five-tab screen
//!
//! Drawing is a pure function of `AppState`: header, tab bar, the active
//! tab's form (or the roster list), a status area, and a footer.

mod components;
mod styling;
mod tabs;

pub use components::{render_footer, render_header};
pub use tabs::{render_active_tab, render_tab_bar};
