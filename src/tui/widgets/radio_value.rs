//! Radio pair for boolean leaves.
//!
//! Boolean settings travel as the literal strings `"true"`/`"false"`, and
//! the control exposes exactly those two options.

use ratatui::{
    buffer::Buffer,
    style::{Color, Style},
};
use unicode_width::UnicodeWidthStr;

/// Renders `(*) true   ( ) false` with the marker on the current value.
///
/// Returns the width consumed.
pub fn render_radio_value(
    value: &str,
    dimmed: bool,
    selection_fg: Color,
    x: u16,
    y: u16,
    buf: &mut Buffer,
) -> u16 {
    let marker = |option: &str| if value == option { "(*)" } else { "( )" };
    let text = format!("{} true   {} false", marker("true"), marker("false"));

    let style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(selection_fg)
    };
    buf.set_string(x, y, &text, style);
    text.width() as u16
}
