//! Dropdown indicator for enumerated values.

use ratatui::{
    buffer::Buffer,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

/// Renders the current selection behind a dropdown marker.
///
/// Returns the width consumed.
pub fn render_select_value(value: &str, dimmed: bool, x: u16, y: u16, buf: &mut Buffer) -> u16 {
    let text = format!("▼ {}", value);
    let style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    buf.set_string(x, y, &text, style);
    text.width() as u16
}
