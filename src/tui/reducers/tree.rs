//! Reducer for the category tree panel: cursor movement, submenu
//! expansion, selection, and the dirty navigation gate.

use tracing::debug;

use crate::settings::Partition;
use crate::tui::action::TreeAction;
use crate::tui::effects::Effect;
use crate::tui::reducers::form;
use crate::tui::state::{AppState, Focus, Selection, TreeRowKind};

pub fn reduce(state: AppState, action: TreeAction) -> (AppState, Effect) {
    match action {
        TreeAction::CursorUp => {
            let mut state = state;
            state.ui.tree_cursor = state.ui.tree_cursor.saturating_sub(1);
            (state, Effect::None)
        }
        TreeAction::CursorDown => {
            let mut state = state;
            let len = state.tree_rows().len();
            if state.ui.tree_cursor + 1 < len {
                state.ui.tree_cursor += 1;
            }
            (state, Effect::None)
        }
        TreeAction::Activate => activate(state),
    }
}

fn activate(mut state: AppState) -> (AppState, Effect) {
    let rows = state.tree_rows();
    let Some(row) = rows.get(state.ui.tree_cursor).cloned() else {
        return (state, Effect::None);
    };

    // Dirty gate: an uncommitted edit is flushed through the save path
    // instead of being discarded by navigation. The selection stays put.
    if state.system.pending_edit.is_some() {
        debug!("TREE: Navigation while dirty - flushing pending edit");
        state
            .system
            .set_status_message("Saving pending changes first...".to_string());
        return form::begin_save(state);
    }

    match row.kind {
        TreeRowKind::Category { expandable: true } => {
            let entry = (row.partition, row.key.clone());
            state.ui.expanded = if state.ui.expanded.as_ref() == Some(&entry) {
                None
            } else {
                Some(entry)
            };
            (state, Effect::None)
        }
        TreeRowKind::Category { expandable: false } => select(state, row.partition, row.key),
        TreeRowKind::Submenu { parent } => select(state, row.partition, parent),
    }
}

fn select(mut state: AppState, partition: Partition, category: String) -> (AppState, Effect) {
    let Some(node) = state
        .data
        .tree
        .as_ref()
        .and_then(|tree| tree.get(partition, &category))
        .cloned()
    else {
        return (state, Effect::None);
    };
    debug!("TREE: Selected {}/{}", partition.wire_name(), category);
    state.ui.selection = Some(Selection::new(partition, category, node));
    state.ui.focus = Focus::Form;
    if partition.is_read_only() {
        state.system.set_status_message(format!(
            "{} settings are read-only in this console",
            partition.title()
        ));
    } else {
        state.system.reset_status_message();
    }
    (state, Effect::None)
}
