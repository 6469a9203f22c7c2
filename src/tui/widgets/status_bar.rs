//! Two-line status bar: separator on top, notices on the left and the
//! dirty/saving indicator on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;
use crate::settings::format;
use crate::tui::state::{SystemState, DEFAULT_STATUS_MESSAGE};

/// Renders the status bar into the bottom two lines of `area`.
pub fn render_status_bar(
    system: &SystemState,
    saving: bool,
    area: Rect,
    buf: &mut Buffer,
    theme: &ThemeConfig,
) {
    if area.height < 2 {
        return;
    }
    buf.set_string(
        area.x,
        area.y,
        "─".repeat(area.width as usize),
        Style::default(),
    );

    let message = system
        .status_message
        .as_deref()
        .unwrap_or(DEFAULT_STATUS_MESSAGE);
    let style = if system.status_is_error {
        Style::default().fg(theme.error_fg)
    } else {
        Style::default()
    };
    buf.set_string(area.x + 1, area.y + 1, message, style);

    let right = if saving {
        Some("saving...".to_string())
    } else {
        system
            .pending_edit
            .as_ref()
            .map(|p| format!("* unsaved: {}", format::category_label(&p.category)))
    };
    if let Some(right) = right {
        let width = right.width() as u16;
        if width + 2 < area.width {
            buf.set_string(
                area.x + area.width - width - 1,
                area.y + 1,
                &right,
                Style::default().fg(theme.selection_fg),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Partition;
    use crate::tui::state::PendingEdit;

    fn buffer_to_string(buf: &Buffer, y: u16) -> String {
        let mut result = String::new();
        for x in 0..buf.area.width {
            if let Some(cell) = buf.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        result.trim_end().to_string()
    }

    #[test]
    fn test_status_bar_default_message() {
        let theme = ThemeConfig::default();
        let area = Rect::new(0, 0, 90, 2);
        let mut buf = Buffer::empty(area);
        let system = SystemState::default();

        render_status_bar(&system, false, area, &mut buf, &theme);

        assert!(buffer_to_string(&buf, 0).starts_with("───"));
        assert!(buffer_to_string(&buf, 1).contains(DEFAULT_STATUS_MESSAGE));
    }

    #[test]
    fn test_status_bar_error_message_styled() {
        let theme = ThemeConfig::default();
        let area = Rect::new(0, 0, 90, 2);
        let mut buf = Buffer::empty(area);
        let mut system = SystemState::default();
        system.set_status_error_message("Something went wrong".to_string());

        render_status_bar(&system, false, area, &mut buf, &theme);

        assert!(buffer_to_string(&buf, 1).contains("Something went wrong"));
        assert_eq!(buf.cell((1, 1)).unwrap().style().fg, Some(theme.error_fg));
    }

    #[test]
    fn test_status_bar_pending_edit_indicator() {
        let theme = ThemeConfig::default();
        let area = Rect::new(0, 0, 90, 2);
        let mut buf = Buffer::empty(area);
        let mut system = SystemState::default();
        system.pending_edit = Some(PendingEdit {
            partition: Partition::Client,
            category: "sdk".to_string(),
        });

        render_status_bar(&system, false, area, &mut buf, &theme);

        assert!(buffer_to_string(&buf, 1).contains("* unsaved: SDK"));
    }

    #[test]
    fn test_status_bar_saving_indicator_wins() {
        let theme = ThemeConfig::default();
        let area = Rect::new(0, 0, 90, 2);
        let mut buf = Buffer::empty(area);
        let mut system = SystemState::default();
        system.pending_edit = Some(PendingEdit {
            partition: Partition::Client,
            category: "sdk".to_string(),
        });

        render_status_bar(&system, true, area, &mut buf, &theme);

        let line = buffer_to_string(&buf, 1);
        assert!(line.contains("saving..."));
        assert!(!line.contains("unsaved"));
    }
}
