//! Integration tests for the full data flow:
//! store -> effect -> action -> reducer -> state.

use std::sync::Arc;

use crate::dev::MockStore;
use crate::settings::{FieldPath, Partition, SettingsNode};
use crate::tui::action::{Action, FormAction, TreeAction};
use crate::tui::state::Focus;
use crate::tui::testing::{
    create_failing_runtime, create_runtime, process_until, runtime_with_store,
};
use crate::tui::Runtime;

async fn load_settings(runtime: &mut Runtime) {
    runtime.dispatch(Action::RefreshSettings);
    let loaded = process_until(runtime, |state| state.data.tree.is_some()).await;
    assert!(loaded, "settings tree never loaded");
}

fn focus_field(runtime: &mut Runtime, key: &str) -> usize {
    let index = runtime
        .state()
        .ui
        .selection
        .as_ref()
        .unwrap()
        .fields()
        .iter()
        .position(|f| f.path == FieldPath::Key(key.to_string()))
        .unwrap();
    for _ in 0..index {
        runtime.dispatch(Action::Form(FormAction::CursorDown));
    }
    index
}

fn select_category(runtime: &mut Runtime, key: &str) {
    let rows = runtime.state().tree_rows();
    let target = rows.iter().position(|r| r.key == key).unwrap();
    runtime.dispatch(Action::SetFocus(Focus::Tree));
    let current = runtime.state().ui.tree_cursor;
    for _ in current..target {
        runtime.dispatch(Action::Tree(TreeAction::CursorDown));
    }
    for _ in target..current {
        runtime.dispatch(Action::Tree(TreeAction::CursorUp));
    }
    runtime.dispatch(Action::Tree(TreeAction::Activate));
}

#[tokio::test]
async fn test_fetch_selects_first_client_category() {
    let mut runtime = create_runtime();
    load_settings(&mut runtime).await;

    let selection = runtime.state().ui.selection.as_ref().unwrap();
    assert_eq!(selection.partition, Partition::Client);
    assert_eq!(selection.category, "dispatcher");
    assert!(!selection.dirty);
}

#[tokio::test]
async fn test_edit_then_save_success_becomes_clean() {
    let store = Arc::new(MockStore::new());
    let mut runtime = runtime_with_store(store.clone());
    load_settings(&mut runtime).await;

    select_category(&mut runtime, "sdk");
    focus_field(&mut runtime, "enable_logging");
    runtime.dispatch(Action::Form(FormAction::ToggleRadio));

    // the dirty broadcast reaches the chrome through the action queue
    let broadcast = process_until(&mut runtime, |state| state.system.pending_edit.is_some()).await;
    assert!(broadcast, "dirty broadcast never arrived");

    runtime.dispatch(Action::Form(FormAction::Save));
    assert!(runtime.state().ui.saving);

    let saved = process_until(&mut runtime, |state| {
        !state.ui.saving && state.system.pending_edit.is_none()
    })
    .await;
    assert!(saved, "save never completed");

    let selection = runtime.state().ui.selection.as_ref().unwrap();
    assert!(!selection.dirty);
    assert_eq!(selection.pristine, selection.edited);
    let sdk = selection.pristine.as_category().unwrap();
    assert_eq!(sdk["enable_logging"], SettingsNode::Leaf("true".to_string()));
    assert_eq!(
        runtime.state().system.status_message,
        Some("Settings updated successfully".to_string())
    );

    // the store received exactly the edited category
    let updates = store.recorded_updates();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].0, Partition::Client);
    assert_eq!(updates[0].1, "sdk");
    assert_eq!(updates[0].2, selection.pristine);
}

#[tokio::test]
async fn test_save_failure_stays_dirty_with_notice() {
    let mut runtime = create_failing_runtime();
    load_settings(&mut runtime).await;

    select_category(&mut runtime, "sdk");
    focus_field(&mut runtime, "no_cluster");
    runtime.dispatch(Action::Form(FormAction::ToggleRadio));
    let broadcast = process_until(&mut runtime, |state| state.system.pending_edit.is_some()).await;
    assert!(broadcast, "dirty broadcast never arrived");

    let edited_before = runtime.state().ui.selection.as_ref().unwrap().edited.clone();
    runtime.dispatch(Action::Form(FormAction::Save));

    let completed = process_until(&mut runtime, |state| !state.ui.saving).await;
    assert!(completed, "save never completed");

    let selection = runtime.state().ui.selection.as_ref().unwrap();
    assert!(selection.dirty);
    assert_eq!(selection.edited, edited_before);
    assert_ne!(selection.edited, selection.pristine);
    assert!(runtime.state().system.status_is_error);
    assert_eq!(
        runtime.state().system.status_message,
        Some("Something went wrong - settings were not updated".to_string())
    );
    // the dirty broadcast was never retracted
    assert!(runtime.state().system.pending_edit.is_some());
}

#[tokio::test]
async fn test_cancel_restores_pristine() {
    let mut runtime = create_runtime();
    load_settings(&mut runtime).await;

    select_category(&mut runtime, "sdk");
    let pristine_before = runtime
        .state()
        .ui
        .selection
        .as_ref()
        .unwrap()
        .pristine
        .clone();

    focus_field(&mut runtime, "enable_logging");
    runtime.dispatch(Action::Form(FormAction::ToggleRadio));
    assert!(runtime.state().ui.selection.as_ref().unwrap().dirty);
    let broadcast = process_until(&mut runtime, |state| state.system.pending_edit.is_some()).await;
    assert!(broadcast, "dirty broadcast never arrived");

    runtime.dispatch(Action::Form(FormAction::CancelEdits));
    let retracted =
        process_until(&mut runtime, |state| state.system.pending_edit.is_none()).await;
    assert!(retracted, "dirty broadcast never retracted");

    let selection = runtime.state().ui.selection.as_ref().unwrap();
    assert!(!selection.dirty);
    assert_eq!(selection.edited, pristine_before);
}

#[tokio::test]
async fn test_navigation_while_dirty_flushes_pending_edit() {
    let store = Arc::new(MockStore::new());
    let mut runtime = runtime_with_store(store.clone());
    load_settings(&mut runtime).await;

    select_category(&mut runtime, "sdk");
    focus_field(&mut runtime, "enable_logging");
    runtime.dispatch(Action::Form(FormAction::ToggleRadio));
    let broadcast = process_until(&mut runtime, |state| state.system.pending_edit.is_some()).await;
    assert!(broadcast, "dirty broadcast never arrived");

    // try to navigate away while dirty: the gate saves and stays put
    select_category(&mut runtime, "dispatcher");
    assert_eq!(
        runtime.state().ui.selection.as_ref().unwrap().category,
        "sdk"
    );

    let flushed = process_until(&mut runtime, |state| {
        !state.ui.saving && state.system.pending_edit.is_none()
    })
    .await;
    assert!(flushed, "pending edit never flushed");
    assert_eq!(store.recorded_updates().len(), 1);

    // a second activation navigates normally now
    select_category(&mut runtime, "dispatcher");
    assert_eq!(
        runtime.state().ui.selection.as_ref().unwrap().category,
        "dispatcher"
    );
}

#[tokio::test]
async fn test_server_selection_is_read_only() {
    let mut runtime = create_runtime();
    load_settings(&mut runtime).await;

    select_category(&mut runtime, "service");
    let selection = runtime.state().ui.selection.as_ref().unwrap();
    assert_eq!(selection.partition, Partition::Server);

    runtime.dispatch(Action::Form(FormAction::Activate));
    runtime.dispatch(Action::Form(FormAction::ToggleRadio));
    runtime.dispatch(Action::Form(FormAction::Save));
    runtime.process_actions();

    let selection = runtime.state().ui.selection.as_ref().unwrap();
    assert!(!selection.dirty);
    assert!(!runtime.state().ui.saving);
    assert_eq!(selection.edited, selection.pristine);
}

#[tokio::test]
async fn test_concurrent_save_is_dropped() {
    let store = Arc::new(MockStore::new());
    let mut runtime = runtime_with_store(store.clone());
    load_settings(&mut runtime).await;

    select_category(&mut runtime, "sdk");
    focus_field(&mut runtime, "enable_logging");
    runtime.dispatch(Action::Form(FormAction::ToggleRadio));

    runtime.dispatch(Action::Form(FormAction::Save));
    runtime.dispatch(Action::Form(FormAction::Save));

    let completed = process_until(&mut runtime, |state| !state.ui.saving).await;
    assert!(completed, "save never completed");
    // give any stray second save time to land
    crate::tui::testing::sleep_ms(50).await;
    runtime.process_actions();

    assert_eq!(store.recorded_updates().len(), 1);
}

#[tokio::test]
async fn test_search_filters_tree_rows() {
    let mut runtime = create_runtime();
    load_settings(&mut runtime).await;

    runtime.dispatch(Action::SetFocus(Focus::Search));
    for c in "cache".chars() {
        runtime.dispatch(Action::Search(crate::tui::action::SearchAction::Input(c)));
    }

    // no fixture category contains "cache"; rows are empty, selection kept
    assert!(runtime.state().tree_rows().is_empty());
    assert!(runtime.state().ui.selection.is_some());

    runtime.dispatch(Action::Search(crate::tui::action::SearchAction::Clear));
    assert!(!runtime.state().tree_rows().is_empty());
}
