//! Top-level layout: search box and tree on the left, form on the right,
//! status bar at the bottom, dropdown modal overlaid when open.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    Frame,
};

use super::state::{AppState, Focus};
use super::widgets;
use crate::settings::format;

const SIDEBAR_WIDTH: u16 = 34;

pub fn draw(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let [content, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(2)]).areas(area);
    let [sidebar, form] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .areas(content);

    let theme = &state.system.config.theme;
    let buf = f.buffer_mut();

    // Sidebar: search box, then the tree.
    let [search_area, _, tree_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(sidebar);
    widgets::render_search_box(
        &state.ui.query,
        state.ui.focus == Focus::Search,
        search_area,
        buf,
        theme,
    );

    if state.data.tree.is_none() && state.data.loading {
        buf.set_string(
            tree_area.x + 1,
            tree_area.y,
            "Loading settings...",
            Style::default().fg(Color::DarkGray),
        );
    } else {
        let rows = state.tree_rows();
        let selected = state
            .ui
            .selection
            .as_ref()
            .map(|s| (s.partition, s.category.as_str()));
        widgets::render_tree_panel(
            &rows,
            state.ui.tree_cursor,
            state.ui.focus == Focus::Tree,
            selected,
            state.ui.expanded.as_ref(),
            state.system.pending_edit.as_ref(),
            tree_area,
            buf,
            theme,
        );
    }

    // Vertical divider between the panes.
    for y in content.y..content.bottom() {
        buf.set_string(sidebar.right().saturating_sub(1), y, "│", Style::default());
    }

    widgets::render_form_panel(
        state.ui.selection.as_ref(),
        state.ui.focus == Focus::Form,
        state.ui.saving,
        inset(form, 1),
        buf,
        theme,
    );

    widgets::render_status_bar(&state.system, state.ui.saving, status, buf, theme);

    if let Some(modal) = state.ui.selection.as_ref().and_then(|s| s.modal.as_ref()) {
        widgets::render_list_modal(
            &format::field_label(format::LOG_LEVEL_KEY),
            &modal.options,
            modal.index,
            area,
            buf,
            theme,
        );
    }
}

fn inset(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y,
        width: area.width.saturating_sub(margin),
        height: area.height,
    }
}
