//! Centered selection modal for enumerated settings (the log-level
//! dropdown).

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};
use unicode_width::UnicodeWidthStr;

use super::centered_rect;
use crate::config::ThemeConfig;

/// Renders the modal centered in `area`, overwriting whatever is below it.
pub fn render_list_modal(
    title: &str,
    options: &[String],
    selected: usize,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) {
    let inner_width = options
        .iter()
        .map(|o| o.width())
        .chain(std::iter::once(title.width()))
        .max()
        .unwrap_or(0)
        + 4;
    let width = (inner_width + 2) as u16;
    let height = options.len() as u16 + 2;
    let rect = centered_rect(width, height, area);
    if rect.width < 4 || rect.height < 3 {
        return;
    }

    // Border with the title in the top edge.
    let horizontal = "─".repeat(rect.width as usize - 2);
    buf.set_string(rect.x, rect.y, format!("╭{}╮", horizontal), Style::default());
    buf.set_string(
        rect.x + 2,
        rect.y,
        format!(" {} ", title),
        Style::default().add_modifier(Modifier::BOLD),
    );
    for (offset, option) in options.iter().enumerate() {
        let y = rect.y + 1 + offset as u16;
        if y >= rect.bottom() - 1 {
            break;
        }
        let marker = if offset == selected { "► " } else { "  " };
        let line = format!("{}{:<width$}", marker, option, width = rect.width as usize - 4);
        let style = if offset == selected {
            Style::default().fg(theme.selection_fg)
        } else {
            Style::default()
        };
        buf.set_string(rect.x, y, "│", Style::default());
        buf.set_string(rect.x + 1, y, &line, style);
        buf.set_string(rect.x + rect.width - 1, y, "│", Style::default());
    }
    buf.set_string(
        rect.x,
        rect.bottom() - 1,
        format!("╰{}╯", horizontal),
        Style::default(),
    );
}
