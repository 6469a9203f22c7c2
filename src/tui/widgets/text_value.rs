//! Free-text value with an optional inline edit cursor.

use ratatui::{
    buffer::Buffer,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

/// Renders the value, or the edit buffer with a block cursor while editing.
///
/// Returns the width consumed.
pub fn render_text_value(
    value: &str,
    edit_buffer: Option<&str>,
    dimmed: bool,
    x: u16,
    y: u16,
    buf: &mut Buffer,
) -> u16 {
    let text = match edit_buffer {
        Some(buffer) => format!("{}█", buffer),
        None => value.to_string(),
    };
    let style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    buf.set_string(x, y, &text, style);
    text.width() as u16
}
