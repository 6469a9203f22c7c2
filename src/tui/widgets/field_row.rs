//! One row of the settings form: margin + cursor marker + label + value.
//!
//! Always renders as 1 line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use super::{render_radio_value, render_select_value, render_text_value};
use crate::config::ThemeConfig;
use crate::settings::{FieldControl, FormField};

/// Renders a single form row.
///
/// Returns the height consumed (1, or 0 when out of the area).
pub fn render_field_row(
    field: &FormField,
    label: &str,
    is_selected: bool,
    edit_buffer: Option<&str>,
    dimmed: bool,
    max_label_width: usize,
    indent: u16,
    area: Rect,
    y: u16,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) -> u16 {
    if y >= area.bottom() {
        return 0;
    }

    let mut x = area.x + indent;

    if is_selected {
        buf.set_string(x, y, "► ", Style::default().fg(theme.selection_fg));
    } else {
        buf.set_string(x, y, "  ", Style::default());
    }
    x += 2;

    let label_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let padded = format!("{:<width$}  ", label, width = max_label_width);
    buf.set_string(x, y, &padded, label_style);
    x += padded.len() as u16;

    match field.control {
        FieldControl::Radio => {
            render_radio_value(&field.value, dimmed, theme.selection_fg, x, y, buf);
        }
        FieldControl::Select => {
            render_select_value(&field.value, dimmed, x, y, buf);
        }
        FieldControl::Text => {
            render_text_value(&field.value, edit_buffer, dimmed, x, y, buf);
        }
    }

    1
}
