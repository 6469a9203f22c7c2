//! Reducers for the data lifecycle: the one-shot fetch, save completions
//! and the dirty-change broadcast.

use tracing::{debug, warn};

use crate::settings::{Partition, SettingsTree};
use crate::tui::action::Action;
use crate::tui::effects::Effect;
use crate::tui::state::{AppState, PendingEdit, Selection};

pub fn refresh(mut state: AppState) -> (AppState, Effect) {
    state.data.loading = true;
    state.data.load_error = None;
    (state, Effect::FetchSettings)
}

pub fn settings_loaded(
    mut state: AppState,
    result: Result<SettingsTree, String>,
) -> (AppState, Effect) {
    state.data.loading = false;
    match result {
        Ok(tree) => {
            debug!(
                "DATA: Settings loaded ({} client, {} server categories)",
                tree.client.len(),
                tree.server.len()
            );
            // First client category becomes the initial selection.
            let first = tree
                .client
                .iter()
                .next()
                .map(|(key, node)| (key.clone(), node.clone()));
            state.data.tree = Some(tree);
            if state.ui.selection.is_none() {
                if let Some((category, node)) = first {
                    state.ui.selection =
                        Some(Selection::new(Partition::Client, category, node));
                }
            }
            state.system.reset_status_message();
        }
        Err(message) => {
            warn!("DATA: Failed to load settings: {}", message);
            state
                .system
                .set_status_error_message(format!("Failed to load settings: {}", message));
            state.data.load_error = Some(message);
        }
    }
    (state, Effect::None)
}

pub fn save_completed(
    mut state: AppState,
    partition: Partition,
    category: String,
    result: Result<(), String>,
) -> (AppState, Effect) {
    state.ui.saving = false;
    match result {
        Ok(()) => {
            let mut effect = Effect::None;
            if let Some(selection) = state.ui.selection.as_mut() {
                if selection.partition == partition && selection.category == category {
                    selection.pristine = selection.edited.clone();
                    if selection.dirty {
                        selection.dirty = false;
                        effect = Effect::Action(Action::DirtyChanged {
                            partition,
                            category: category.clone(),
                            dirty: false,
                        });
                    }
                    if let Some(tree) = state.data.tree.as_mut() {
                        tree.set(partition, &category, selection.edited.clone());
                    }
                }
            }
            state
                .system
                .set_status_message("Settings updated successfully".to_string());
            (state, effect)
        }
        Err(message) => {
            warn!("DATA: Save of {} failed: {}", category, message);
            state.system.set_status_error_message(
                "Something went wrong - settings were not updated".to_string(),
            );
            (state, Effect::None)
        }
    }
}

pub fn dirty_changed(
    mut state: AppState,
    partition: Partition,
    category: String,
    dirty: bool,
) -> (AppState, Effect) {
    debug!(
        "DATA: Dirty flag for {}/{} -> {}",
        partition.wire_name(),
        category,
        dirty
    );
    state.system.pending_edit = dirty.then_some(PendingEdit {
        partition,
        category,
    });
    (state, Effect::None)
}
