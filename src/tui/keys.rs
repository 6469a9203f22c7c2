//! Keyboard event to action mapping.
//!
//! Routing is priority-based: an open dropdown modal captures everything,
//! then an active inline edit buffer, then the search box, then global keys,
//! then the focused pane.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use super::action::{Action, FormAction, SearchAction, TreeAction};
use super::state::{AppState, Focus};

fn is_modal_open(state: &AppState) -> bool {
    state
        .ui
        .selection
        .as_ref()
        .is_some_and(|s| s.modal.is_some())
}

fn is_editing(state: &AppState) -> bool {
    state
        .ui
        .selection
        .as_ref()
        .is_some_and(|s| s.editing.is_some())
}

/// ESC walks up the focus hierarchy: modal, edit buffer, dirty edits,
/// form -> tree. At the tree there is nothing to leave; 'q' quits.
fn handle_esc_key(state: &AppState) -> Option<Action> {
    if is_modal_open(state) {
        return Some(Action::Form(FormAction::ModalCancel));
    }
    if is_editing(state) {
        return Some(Action::Form(FormAction::EditCancel));
    }
    match state.ui.focus {
        Focus::Search => Some(Action::Search(SearchAction::Clear)),
        Focus::Form => {
            if state.ui.selection.as_ref().is_some_and(|s| s.dirty) {
                Some(Action::Form(FormAction::CancelEdits))
            } else {
                Some(Action::SetFocus(Focus::Tree))
            }
        }
        Focus::Tree => {
            debug!("KEY: ESC at tree - ignoring (use 'q' to quit)");
            None
        }
    }
}

fn handle_modal_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::Form(FormAction::ModalUp)),
        KeyCode::Down => Some(Action::Form(FormAction::ModalDown)),
        KeyCode::Enter => Some(Action::Form(FormAction::ModalCommit)),
        KeyCode::Esc => Some(Action::Form(FormAction::ModalCancel)),
        _ => None,
    }
}

fn handle_editing_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char(c) => Some(Action::Form(FormAction::EditInput(c))),
        KeyCode::Backspace => Some(Action::Form(FormAction::EditBackspace)),
        KeyCode::Enter => Some(Action::Form(FormAction::EditCommit)),
        KeyCode::Esc => Some(Action::Form(FormAction::EditCancel)),
        _ => None,
    }
}

fn handle_search_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Char(c) => Some(Action::Search(SearchAction::Input(c))),
        KeyCode::Backspace => Some(Action::Search(SearchAction::Backspace)),
        KeyCode::Esc => Some(Action::Search(SearchAction::Clear)),
        KeyCode::Enter | KeyCode::Down | KeyCode::Tab => Some(Action::SetFocus(Focus::Tree)),
        _ => None,
    }
}

fn handle_tree_keys(key_code: KeyCode) -> Option<Action> {
    match key_code {
        KeyCode::Up => Some(Action::Tree(TreeAction::CursorUp)),
        KeyCode::Down => Some(Action::Tree(TreeAction::CursorDown)),
        KeyCode::Enter => Some(Action::Tree(TreeAction::Activate)),
        _ => None,
    }
}

fn handle_form_keys(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Up => Some(Action::Form(FormAction::CursorUp)),
        KeyCode::Down => Some(Action::Form(FormAction::CursorDown)),
        KeyCode::Enter => Some(Action::Form(FormAction::Activate)),
        KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
            Some(Action::Form(FormAction::ToggleRadio))
        }
        KeyCode::Char('s') => Some(Action::Form(FormAction::Save)),
        _ => None,
    }
}

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    // Modal and edit buffer capture the keyboard entirely.
    if is_modal_open(state) {
        return handle_modal_keys(key.code);
    }
    if is_editing(state) {
        return handle_editing_keys(key.code);
    }

    // The search box eats printable characters, so it is routed before the
    // global keys.
    if state.ui.focus == Focus::Search {
        return handle_search_keys(key.code);
    }

    if key.code == KeyCode::Esc {
        return handle_esc_key(state);
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Action::Quit),
        KeyCode::Char('/') => return Some(Action::SetFocus(Focus::Search)),
        KeyCode::Tab => return Some(Action::FocusNext),
        KeyCode::BackTab => return Some(Action::FocusPrev),
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Form(FormAction::Save));
        }
        _ => {}
    }

    match state.ui.focus {
        Focus::Tree => handle_tree_keys(key.code),
        Focus::Form => handle_form_keys(key),
        Focus::Search => unreachable!("search focus handled above"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::settings::Partition;
    use crate::tui::state::{ListModalState, Selection};
    use crate::settings::FieldPath;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn state_with_selection() -> AppState {
        let tree = fixtures::settings_tree();
        let mut state = AppState::default();
        state.ui.selection = Some(Selection::new(
            Partition::Client,
            "sdk".to_string(),
            tree.client["sdk"].clone(),
        ));
        state.data.tree = Some(tree);
        state
    }

    #[test]
    fn test_quit_key() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_slash_focuses_search() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Char('/')), &state),
            Some(Action::SetFocus(Focus::Search))
        ));
    }

    #[test]
    fn test_tab_cycles_focus() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Tab), &state),
            Some(Action::FocusNext)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::BackTab), &state),
            Some(Action::FocusPrev)
        ));
    }

    #[test]
    fn test_tree_navigation_keys() {
        let state = AppState::default();
        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::Tree(TreeAction::CursorDown))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::Tree(TreeAction::Activate))
        ));
    }

    #[test]
    fn test_search_focus_captures_characters() {
        let mut state = AppState::default();
        state.ui.focus = Focus::Search;

        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::Search(SearchAction::Input('q')))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::Search(SearchAction::Clear))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::SetFocus(Focus::Tree))
        ));
    }

    #[test]
    fn test_form_keys() {
        let mut state = state_with_selection();
        state.ui.focus = Focus::Form;

        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::Form(FormAction::Activate))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char(' ')), &state),
            Some(Action::Form(FormAction::ToggleRadio))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Char('s')), &state),
            Some(Action::Form(FormAction::Save))
        ));
    }

    #[test]
    fn test_edit_buffer_captures_keyboard() {
        let mut state = state_with_selection();
        state.ui.focus = Focus::Form;
        state.ui.selection.as_mut().unwrap().editing = Some("buf".to_string());

        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::Form(FormAction::EditInput('q')))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Enter), &state),
            Some(Action::Form(FormAction::EditCommit))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::Form(FormAction::EditCancel))
        ));
    }

    #[test]
    fn test_modal_captures_keyboard() {
        let mut state = state_with_selection();
        state.ui.selection.as_mut().unwrap().modal = Some(ListModalState {
            field: FieldPath::Key("log_level".to_string()),
            options: vec!["debug".to_string()],
            index: 0,
        });

        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::Form(FormAction::ModalDown))
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::Form(FormAction::ModalCancel))
        ));
        assert!(key_to_action(key(KeyCode::Char('q')), &state).is_none());
    }

    #[test]
    fn test_esc_discards_dirty_edits_in_form() {
        let mut state = state_with_selection();
        state.ui.focus = Focus::Form;
        state.ui.selection.as_mut().unwrap().dirty = true;

        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::Form(FormAction::CancelEdits))
        ));
    }

    #[test]
    fn test_esc_returns_focus_to_tree_when_clean() {
        let mut state = state_with_selection();
        state.ui.focus = Focus::Form;

        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::SetFocus(Focus::Tree))
        ));
    }

    #[test]
    fn test_esc_at_tree_is_ignored() {
        let state = AppState::default();
        assert!(key_to_action(key(KeyCode::Esc), &state).is_none());
    }
}
