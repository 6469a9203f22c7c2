//! Global actions - like Redux actions
//!
//! All state changes in the application happen through actions, dispatched
//! from user input (key events) or from effects (the async fetch and save
//! completions).

use crate::settings::{Partition, SettingsTree};
use crate::tui::state::Focus;

#[derive(Debug, Clone)]
pub enum Action {
    // Data lifecycle
    RefreshSettings,
    SettingsLoaded(Result<SettingsTree, String>),
    SaveCompleted {
        partition: Partition,
        category: String,
        result: Result<(), String>,
    },

    /// Broadcast on every Clean/Dirty transition so the navigation chrome
    /// reacts to the transition itself instead of polling the selection.
    DirtyChanged {
        partition: Partition,
        category: String,
        dirty: bool,
    },

    // Focus navigation
    SetFocus(Focus),
    FocusNext,
    FocusPrev,

    // Panel-specific actions
    Tree(TreeAction),
    Form(FormAction),
    Search(SearchAction),

    // System actions
    Quit,
}

/// Actions for the category tree panel.
#[derive(Debug, Clone)]
pub enum TreeAction {
    CursorUp,
    CursorDown,
    /// Enter on the cursor row: select a category, toggle a submenu, or -
    /// while dirty - flush the pending edit instead of navigating.
    Activate,
}

/// Actions for the settings form panel.
#[derive(Debug, Clone)]
pub enum FormAction {
    CursorUp,
    CursorDown,
    /// Enter on the focused field: start a text edit, open the log-level
    /// dropdown, or toggle a radio pair.
    Activate,
    /// Space/Left/Right on a radio field.
    ToggleRadio,

    // Inline text edit buffer
    EditInput(char),
    EditBackspace,
    EditCommit,
    EditCancel,

    // Log-level dropdown modal
    ModalUp,
    ModalDown,
    ModalCommit,
    ModalCancel,

    /// Submit the edited category to the store.
    Save,
    /// Discard edits, restoring the pristine value.
    CancelEdits,
}

/// Actions for the search box.
#[derive(Debug, Clone)]
pub enum SearchAction {
    Input(char),
    Backspace,
    Clear,
}
