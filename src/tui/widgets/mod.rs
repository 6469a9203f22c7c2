//! Widgets for the settings console.
//!
//! Widgets are plain functions rendering into a ratatui `Buffer`, so they
//! can be unit-tested without a terminal. Typed value renderers:
//! - Radio: two-option `(*) true ( ) false` pair for boolean leaves
//! - Select: dropdown indicator with the current log level
//! - Text: free text with an optional edit cursor

pub mod field_row;
pub mod form_panel;
pub mod list_modal;
pub mod radio_value;
pub mod search_box;
pub mod select_value;
pub mod status_bar;
pub mod text_value;
pub mod tree_panel;

pub use field_row::render_field_row;
pub use form_panel::render_form_panel;
pub use list_modal::render_list_modal;
pub use radio_value::render_radio_value;
pub use search_box::render_search_box;
pub use select_value::render_select_value;
pub use status_bar::render_status_bar;
pub use text_value::render_text_value;
pub use tree_panel::render_tree_panel;

use ratatui::layout::Rect;

/// Rect of the given size centered inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
