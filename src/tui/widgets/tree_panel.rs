//! The category tree: both partitions as selectable lists, with one-level
//! submenu expansion and a marker for the category holding unsaved edits.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use crate::config::ThemeConfig;
use crate::settings::{format, Partition};
use crate::tui::state::{PendingEdit, TreeRow, TreeRowKind};

const MARGIN: u16 = 1;
const SUBMENU_INDENT: u16 = 4;

/// Renders the tree rows under their partition headings.
pub fn render_tree_panel(
    rows: &[TreeRow],
    cursor: usize,
    focused: bool,
    selected: Option<(Partition, &str)>,
    expanded: Option<&(Partition, String)>,
    pending: Option<&PendingEdit>,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) {
    let mut y = area.y;
    let mut current_partition: Option<Partition> = None;

    for (index, row) in rows.iter().enumerate() {
        if current_partition != Some(row.partition) {
            if current_partition.is_some() {
                y += 1;
            }
            if y >= area.bottom() {
                return;
            }
            buf.set_string(
                area.x + MARGIN,
                y,
                row.partition.title(),
                Style::default().add_modifier(Modifier::BOLD),
            );
            y += 1;
            current_partition = Some(row.partition);
        }
        if y >= area.bottom() {
            return;
        }

        let mut x = area.x + MARGIN;
        if focused && index == cursor {
            buf.set_string(x, y, "► ", Style::default().fg(theme.selection_fg));
        } else {
            buf.set_string(x, y, "  ", Style::default());
        }
        x += 2;

        match &row.kind {
            TreeRowKind::Category { expandable } => {
                if *expandable {
                    let is_open =
                        expanded.is_some_and(|(p, k)| *p == row.partition && *k == row.key);
                    let arrow = if is_open { "▾ " } else { "▸ " };
                    buf.set_string(x, y, arrow, Style::default().fg(Color::DarkGray));
                }
                let arrow_width = if *expandable { 2 } else { 0 };
                let is_selected =
                    selected.is_some_and(|(p, k)| p == row.partition && k == row.key);
                let style = if is_selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let mut label = format::category_label(&row.key);
                if pending.is_some_and(|p| p.partition == row.partition && p.category == row.key)
                {
                    label.push_str(" *");
                }
                buf.set_string(x + arrow_width, y, &label, style);
            }
            TreeRowKind::Submenu { .. } => {
                buf.set_string(
                    area.x + MARGIN + SUBMENU_INDENT,
                    y,
                    format::submenu_label(&row.key),
                    Style::default(),
                );
            }
        }
        y += 1;
    }
}
