//! Styling utilities and color schemes

use ratatui::style::Color;

/// Spinner frames for in-flight requests
pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

pub fn default_fg() -> Color {
    Color::White
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

/// Get the display color for a belt rank. Accepts the backend's Portuguese
/// names as well as English ones.
pub fn belt_color(belt: &str) -> Color {
    match belt.trim().to_lowercase().as_str() {
        "branca" | "white" => Color::White,
        "azul" | "blue" => Color::Blue,
        "roxa" | "purple" => Color::Magenta,
        "marrom" | "brown" => Color::LightRed,
        "preta" | "black" => Color::DarkGray,
        _ => Color::White,
    }
}
