//! Root application state - single source of truth.
//!
//! All state changes happen through the reducer; the view layer only ever
//! reads this struct.

use crate::config::Config;
use crate::settings::{
    filter_categories, form_fields, FieldPath, FormField, Partition, SettingsNode, SettingsTree,
};

#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Data fetched from the store
    pub data: DataState,
    /// UI state (focus, cursors, selection)
    pub ui: UiState,
    /// System state (config, status line, dirty broadcast)
    pub system: SystemState,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// The settings tree, once loaded. Absent data renders empty.
    pub tree: Option<SettingsTree>,
    pub loading: bool,
    pub load_error: Option<String>,
}

/// Which pane receives non-global key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    Search,
    #[default]
    Tree,
    Form,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::Tree,
            Focus::Tree => Focus::Form,
            Focus::Form => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Form,
            Focus::Tree => Focus::Search,
            Focus::Form => Focus::Tree,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Search box contents; filters both partitions' category lists.
    pub query: String,
    /// Cursor position within the flattened tree rows.
    pub tree_cursor: usize,
    /// The single expanded submenu, if any.
    pub expanded: Option<(Partition, String)>,
    pub selection: Option<Selection>,
    /// One save in flight at a time; a second submit is dropped.
    pub saving: bool,
}

/// The currently selected category and its edit state.
///
/// `edited` and `pristine` stay structurally identical until a field edit
/// occurs; Save promotes edited to pristine, Cancel restores pristine.
#[derive(Debug, Clone)]
pub struct Selection {
    pub partition: Partition,
    pub category: String,
    pub edited: SettingsNode,
    pub pristine: SettingsNode,
    pub dirty: bool,
    /// Focused field index within `fields()`.
    pub cursor: usize,
    /// Inline edit buffer for the focused text field.
    pub editing: Option<String>,
    /// Open log-level dropdown.
    pub modal: Option<ListModalState>,
}

#[derive(Debug, Clone)]
pub struct ListModalState {
    pub field: FieldPath,
    pub options: Vec<String>,
    pub index: usize,
}

impl Selection {
    pub fn new(partition: Partition, category: String, node: SettingsNode) -> Self {
        Selection {
            partition,
            category,
            pristine: node.clone(),
            edited: node,
            dirty: false,
            cursor: 0,
            editing: None,
            modal: None,
        }
    }

    /// The editable rows of the form, flattened from the edited node.
    pub fn fields(&self) -> Vec<FormField> {
        form_fields(&self.edited)
    }

    pub fn focused_field(&self) -> Option<FormField> {
        self.fields().into_iter().nth(self.cursor)
    }

    pub fn read_only(&self) -> bool {
        self.partition.is_read_only()
    }
}

/// Set by the dirty-change broadcast; the status bar and the tree gate read
/// this instead of polling the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub partition: Partition,
    pub category: String,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: tab switch pane | enter select/edit | s save | esc discard | / search | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub pending_edit: Option<PendingEdit>,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

/// One selectable row of the tree panel.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub partition: Partition,
    pub key: String,
    pub kind: TreeRowKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeRowKind {
    /// A top-level category; `expandable` when it holds nested categories.
    Category { expandable: bool },
    /// An entry of the expanded submenu; activating it selects the parent.
    Submenu { parent: String },
}

/// Flatten the (filtered) tree into the selectable rows of the tree panel,
/// in render order: all client categories, then all server categories, with
/// submenu entries inlined after their expanded parent.
pub fn build_tree_rows(
    tree: &SettingsTree,
    query: &str,
    expanded: Option<&(Partition, String)>,
) -> Vec<TreeRow> {
    let filtered = filter_categories(tree, query);
    let mut rows = Vec::new();
    for partition in Partition::ALL {
        for (key, node) in filtered.partition(partition) {
            let expandable = node.has_nested_categories();
            rows.push(TreeRow {
                partition,
                key: key.clone(),
                kind: TreeRowKind::Category { expandable },
            });
            let is_expanded =
                expanded.is_some_and(|(p, k)| *p == partition && k == key) && expandable;
            if is_expanded {
                if let Some(entries) = node.as_category() {
                    for child_key in entries.keys() {
                        rows.push(TreeRow {
                            partition,
                            key: child_key.clone(),
                            kind: TreeRowKind::Submenu { parent: key.clone() },
                        });
                    }
                }
            }
        }
    }
    rows
}

impl AppState {
    /// Rows of the tree panel for the current query and expansion state.
    pub fn tree_rows(&self) -> Vec<TreeRow> {
        match &self.data.tree {
            Some(tree) => build_tree_rows(tree, &self.ui.query, self.ui.expanded.as_ref()),
            None => Vec::new(),
        }
    }
}
