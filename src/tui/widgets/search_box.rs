//! Search box filtering the category lists.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

use crate::config::ThemeConfig;

/// Renders the one-line search input with a cursor while focused.
pub fn render_search_box(
    query: &str,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) {
    if area.height == 0 {
        return;
    }
    let label_style = if focused {
        Style::default().fg(theme.selection_fg)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    buf.set_string(area.x + 1, area.y, "Search:", label_style);

    let text = if focused {
        format!("{}█", query)
    } else if query.is_empty() {
        "-".to_string()
    } else {
        query.to_string()
    };
    buf.set_string(area.x + 9, area.y, &text, Style::default());
}
