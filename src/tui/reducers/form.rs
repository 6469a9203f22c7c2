//! Reducer for the settings form: field edits, the Clean/Dirty machine and
//! the save/cancel workflow.

use tracing::debug;

use crate::settings::{format, set_field, FieldControl, FieldPath};
use crate::tui::action::{Action, FormAction};
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, ListModalState};

const READ_ONLY_NOTICE: &str = "Server settings are read-only in this console";

pub fn reduce(state: AppState, action: FormAction) -> (AppState, Effect) {
    match action {
        FormAction::CursorUp => move_cursor(state, -1),
        FormAction::CursorDown => move_cursor(state, 1),
        FormAction::Activate => activate(state),
        FormAction::ToggleRadio => toggle_radio(state),
        FormAction::EditInput(c) => edit_input(state, c),
        FormAction::EditBackspace => edit_backspace(state),
        FormAction::EditCommit => edit_commit(state),
        FormAction::EditCancel => edit_cancel(state),
        FormAction::ModalUp => move_modal(state, -1),
        FormAction::ModalDown => move_modal(state, 1),
        FormAction::ModalCommit => modal_commit(state),
        FormAction::ModalCancel => modal_cancel(state),
        FormAction::Save => begin_save(state),
        FormAction::CancelEdits => cancel_edits(state),
    }
}

fn move_cursor(mut state: AppState, delta: i32) -> (AppState, Effect) {
    if let Some(selection) = state.ui.selection.as_mut() {
        let len = selection.fields().len();
        if len > 0 {
            let cursor = selection.cursor as i32 + delta;
            selection.cursor = cursor.clamp(0, len as i32 - 1) as usize;
        }
    }
    (state, Effect::None)
}

fn activate(mut state: AppState) -> (AppState, Effect) {
    let Some(selection) = state.ui.selection.as_mut() else {
        return (state, Effect::None);
    };
    if selection.read_only() {
        state.system.set_status_message(READ_ONLY_NOTICE.to_string());
        return (state, Effect::None);
    }
    let Some(field) = selection.focused_field() else {
        return (state, Effect::None);
    };
    match field.control {
        FieldControl::Text => {
            selection.editing = Some(field.value.clone());
            state
                .system
                .set_status_message("Editing... (Enter to apply, Esc to cancel)".to_string());
            (state, Effect::None)
        }
        FieldControl::Select => {
            selection.modal = Some(ListModalState {
                field: field.path,
                options: format::LOG_LEVELS.iter().map(|s| s.to_string()).collect(),
                index: format::log_level_index(&field.value),
            });
            state.system.set_status_message(
                "Select level (Up/Down, Enter to apply, Esc to cancel)".to_string(),
            );
            (state, Effect::None)
        }
        FieldControl::Radio => toggle_radio(state),
    }
}

fn toggle_radio(mut state: AppState) -> (AppState, Effect) {
    let Some(selection) = state.ui.selection.as_ref() else {
        return (state, Effect::None);
    };
    if selection.read_only() {
        state.system.set_status_message(READ_ONLY_NOTICE.to_string());
        return (state, Effect::None);
    }
    let Some(field) = selection.focused_field() else {
        return (state, Effect::None);
    };
    if field.control != FieldControl::Radio {
        return (state, Effect::None);
    }
    let flipped = if field.value == "true" { "false" } else { "true" };
    debug!("FORM: Toggled {:?} -> {}", field.path, flipped);
    commit_field(state, field.path, flipped.to_string())
}

fn edit_input(mut state: AppState, c: char) -> (AppState, Effect) {
    if let Some(buffer) = state
        .ui
        .selection
        .as_mut()
        .and_then(|s| s.editing.as_mut())
    {
        buffer.push(c);
    }
    (state, Effect::None)
}

fn edit_backspace(mut state: AppState) -> (AppState, Effect) {
    if let Some(buffer) = state
        .ui
        .selection
        .as_mut()
        .and_then(|s| s.editing.as_mut())
    {
        buffer.pop();
    }
    (state, Effect::None)
}

fn edit_commit(mut state: AppState) -> (AppState, Effect) {
    let committed = state.ui.selection.as_mut().and_then(|selection| {
        let buffer = selection.editing.take()?;
        let field = selection.focused_field()?;
        Some((field.path, buffer))
    });
    match committed {
        Some((path, value)) => commit_field(state, path, value),
        None => (state, Effect::None),
    }
}

fn edit_cancel(mut state: AppState) -> (AppState, Effect) {
    if let Some(selection) = state.ui.selection.as_mut() {
        if selection.editing.take().is_some() {
            state
                .system
                .set_status_message("Editing cancelled".to_string());
        }
    }
    (state, Effect::None)
}

fn move_modal(mut state: AppState, delta: i32) -> (AppState, Effect) {
    if let Some(modal) = state.ui.selection.as_mut().and_then(|s| s.modal.as_mut()) {
        let index = modal.index as i32 + delta;
        modal.index = index.clamp(0, modal.options.len() as i32 - 1) as usize;
    }
    (state, Effect::None)
}

fn modal_commit(mut state: AppState) -> (AppState, Effect) {
    let committed = state
        .ui
        .selection
        .as_mut()
        .and_then(|selection| selection.modal.take())
        .map(|modal| {
            let value = modal.options[modal.index].clone();
            (modal.field, value)
        });
    match committed {
        Some((path, value)) => commit_field(state, path, value),
        None => (state, Effect::None),
    }
}

fn modal_cancel(mut state: AppState) -> (AppState, Effect) {
    if let Some(selection) = state.ui.selection.as_mut() {
        if selection.modal.take().is_some() {
            state
                .system
                .set_status_message("Selection cancelled".to_string());
        }
    }
    (state, Effect::None)
}

/// Merge one value into the edited node and run the Clean -> Dirty
/// transition. The broadcast fires only on the transition, not on every
/// subsequent edit.
fn commit_field(mut state: AppState, path: FieldPath, value: String) -> (AppState, Effect) {
    let Some(selection) = state.ui.selection.as_mut() else {
        return (state, Effect::None);
    };
    let was_dirty = selection.dirty;
    set_field(&mut selection.edited, &path, value);
    selection.dirty = true;
    let effect = if was_dirty {
        Effect::None
    } else {
        Effect::Action(Action::DirtyChanged {
            partition: selection.partition,
            category: selection.category.clone(),
            dirty: true,
        })
    };
    (state, effect)
}

/// Submit the edited category. One save may be in flight at a time; a
/// second submit is dropped with a notice.
pub fn begin_save(mut state: AppState) -> (AppState, Effect) {
    if state.ui.saving {
        state
            .system
            .set_status_message("A save is already in progress".to_string());
        return (state, Effect::None);
    }
    let Some(selection) = state.ui.selection.as_ref() else {
        return (state, Effect::None);
    };
    if selection.read_only() {
        state.system.set_status_message(READ_ONLY_NOTICE.to_string());
        return (state, Effect::None);
    }
    let effect = Effect::Save {
        partition: selection.partition,
        category: selection.category.clone(),
        node: selection.edited.clone(),
    };
    state.ui.saving = true;
    (state, effect)
}

fn cancel_edits(mut state: AppState) -> (AppState, Effect) {
    let Some(selection) = state.ui.selection.as_mut() else {
        return (state, Effect::None);
    };
    selection.editing = None;
    selection.modal = None;
    if !selection.dirty {
        return (state, Effect::None);
    }
    selection.edited = selection.pristine.clone();
    selection.dirty = false;
    let partition = selection.partition;
    let category = selection.category.clone();
    state
        .system
        .set_status_message("Changes discarded".to_string());
    (
        state,
        Effect::Action(Action::DirtyChanged {
            partition,
            category,
            dirty: false,
        }),
    )
}
