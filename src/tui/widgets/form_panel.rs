//! The settings form: title, typed rows grouped under section headings for
//! nested categories, and the save/cancel hint line.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use super::render_field_row;
use crate::config::ThemeConfig;
use crate::settings::format;
use crate::tui::state::Selection;

const MARGIN: u16 = 2;
const SECTION_INDENT: u16 = 2;

/// Renders the form for the current selection.
pub fn render_form_panel(
    selection: Option<&Selection>,
    focused: bool,
    saving: bool,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) {
    let Some(selection) = selection else {
        if area.height > 1 {
            buf.set_string(
                area.x + MARGIN,
                area.y + 1,
                "Select a category to edit its settings",
                Style::default().fg(Color::DarkGray),
            );
        }
        return;
    };

    let dimmed = selection.read_only();
    let mut y = area.y;

    // Title
    let title = format::category_label(&selection.category);
    buf.set_string(
        area.x + MARGIN,
        y,
        &title,
        Style::default().add_modifier(Modifier::BOLD),
    );
    y += 1;
    if y >= area.bottom() {
        return;
    }
    buf.set_string(
        area.x + MARGIN,
        y,
        "─".repeat(title.len()),
        Style::default(),
    );
    y += 2;

    let fields = selection.fields();
    let max_label_width = fields
        .iter()
        .map(|f| format::field_label(f.label_key(&selection.category)).len())
        .max()
        .unwrap_or(0);

    let mut current_section: Option<String> = None;
    for (index, field) in fields.iter().enumerate() {
        if y >= area.bottom() {
            return;
        }

        // Section heading when entering a nested category.
        let section = field.section().map(|s| s.to_string());
        if section != current_section {
            if let Some(name) = &section {
                if current_section.is_some() {
                    y += 1;
                }
                if y >= area.bottom() {
                    return;
                }
                buf.set_string(
                    area.x + MARGIN,
                    y,
                    format::submenu_label(name),
                    Style::default()
                        .fg(theme.selection_fg)
                        .add_modifier(Modifier::BOLD),
                );
                y += 1;
            }
            current_section = section;
        }

        let indent = if field.section().is_some() {
            MARGIN + SECTION_INDENT
        } else {
            MARGIN
        };
        let is_selected = focused && index == selection.cursor;
        let edit_buffer = if is_selected {
            selection.editing.as_deref()
        } else {
            None
        };
        let label = format::field_label(field.label_key(&selection.category));

        y += render_field_row(
            field,
            &label,
            is_selected,
            edit_buffer,
            dimmed,
            max_label_width,
            indent,
            area,
            y,
            buf,
            theme,
        );
    }

    // Hint line
    y += 1;
    if y >= area.bottom() {
        return;
    }
    let hint = if dimmed {
        "read-only".to_string()
    } else if saving {
        "saving...".to_string()
    } else if selection.dirty {
        "unsaved changes - s to save, esc to discard".to_string()
    } else {
        String::new()
    };
    if !hint.is_empty() {
        buf.set_string(
            area.x + MARGIN,
            y,
            &hint,
            Style::default().fg(Color::DarkGray),
        );
    }
}
