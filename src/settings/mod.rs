//! Data model for the dispatch server's settings tree.
//!
//! The server exposes two partitions, `client` and `server`, each mapping
//! category names to either a leaf value or a nested category. Values always
//! travel as strings; booleans are the literal strings `"true"`/`"false"`.

pub mod format;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One of the two top-level settings namespaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Partition {
    Client,
    Server,
}

impl Partition {
    pub const ALL: [Partition; 2] = [Partition::Client, Partition::Server];

    /// Name used in API payloads.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Partition::Client => "client",
            Partition::Server => "server",
        }
    }

    /// Heading shown in the tree panel.
    pub fn title(&self) -> &'static str {
        match self {
            Partition::Client => "Client",
            Partition::Server => "Server",
        }
    }

    /// Server-managed settings are read-only in this console.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Partition::Server)
    }
}

/// A node in the settings tree: either a leaf value or a nested category.
///
/// `untagged` matches the wire shape: a JSON string deserializes as a leaf,
/// an object as a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingsNode {
    Leaf(String),
    Category(BTreeMap<String, SettingsNode>),
}

impl SettingsNode {
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            SettingsNode::Leaf(value) => Some(value),
            SettingsNode::Category(_) => None,
        }
    }

    pub fn as_category(&self) -> Option<&BTreeMap<String, SettingsNode>> {
        match self {
            SettingsNode::Leaf(_) => None,
            SettingsNode::Category(entries) => Some(entries),
        }
    }

    /// True for the literal strings `"true"` and `"false"`.
    pub fn is_bool(&self) -> bool {
        matches!(self.as_leaf(), Some("true") | Some("false"))
    }

    /// True if this is a category with at least one category child,
    /// i.e. the tree panel should offer a submenu for it.
    pub fn has_nested_categories(&self) -> bool {
        self.as_category()
            .map(|entries| {
                entries
                    .values()
                    .any(|child| matches!(child, SettingsNode::Category(_)))
            })
            .unwrap_or(false)
    }
}

/// The full two-partition settings tree as fetched from the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsTree {
    #[serde(default)]
    pub client: BTreeMap<String, SettingsNode>,
    #[serde(default)]
    pub server: BTreeMap<String, SettingsNode>,
}

impl SettingsTree {
    pub fn partition(&self, partition: Partition) -> &BTreeMap<String, SettingsNode> {
        match partition {
            Partition::Client => &self.client,
            Partition::Server => &self.server,
        }
    }

    fn partition_mut(&mut self, partition: Partition) -> &mut BTreeMap<String, SettingsNode> {
        match partition {
            Partition::Client => &mut self.client,
            Partition::Server => &mut self.server,
        }
    }

    pub fn get(&self, partition: Partition, category: &str) -> Option<&SettingsNode> {
        self.partition(partition).get(category)
    }

    /// Replace one category wholesale (used after a save is acknowledged).
    pub fn set(&mut self, partition: Partition, category: &str, node: SettingsNode) {
        self.partition_mut(partition).insert(category.to_string(), node);
    }
}

/// Filter both partitions' top-level categories by case-insensitive
/// substring match on the raw key. An empty query returns the tree unchanged.
pub fn filter_categories(tree: &SettingsTree, query: &str) -> SettingsTree {
    if query.is_empty() {
        return tree.clone();
    }
    let needle = query.to_lowercase();
    let keep = |entries: &BTreeMap<String, SettingsNode>| {
        entries
            .iter()
            .filter(|(key, _)| key.contains(&needle))
            .map(|(key, node)| (key.clone(), node.clone()))
            .collect()
    };
    SettingsTree {
        client: keep(&tree.client),
        server: keep(&tree.server),
    }
}

/// Addresses one editable value within a selected category.
///
/// Nesting is one level deep at most; anything deeper is not editable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPath {
    /// The category itself is a leaf value.
    Own,
    /// A direct child of the category.
    Key(String),
    /// A child of a nested sub-category.
    Nested { section: String, key: String },
}

/// Which control renders and edits a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldControl {
    /// `"true"`/`"false"` leaf: two-option radio pair.
    Radio,
    /// The reserved log-level key: enumerated dropdown.
    Select,
    /// Everything else: free text.
    Text,
}

/// One editable row of the form, flattened out of a category node.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub path: FieldPath,
    pub value: String,
    pub control: FieldControl,
}

impl FormField {
    /// The raw key the display label derives from.
    pub fn label_key<'a>(&'a self, category: &'a str) -> &'a str {
        match &self.path {
            FieldPath::Own => category,
            FieldPath::Key(key) => key,
            FieldPath::Nested { key, .. } => key,
        }
    }

    /// Section heading this field renders under, if any.
    pub fn section(&self) -> Option<&str> {
        match &self.path {
            FieldPath::Nested { section, .. } => Some(section),
            _ => None,
        }
    }
}

fn control_for(key: &str, value: &str) -> FieldControl {
    if value == "true" || value == "false" {
        FieldControl::Radio
    } else if key == format::LOG_LEVEL_KEY {
        FieldControl::Select
    } else {
        FieldControl::Text
    }
}

/// Flatten a category node into editable form fields, recursing exactly one
/// level into nested categories. Deeper nesting is not supported and is
/// skipped.
pub fn form_fields(node: &SettingsNode) -> Vec<FormField> {
    let mut fields = Vec::new();
    match node {
        SettingsNode::Leaf(value) => fields.push(FormField {
            path: FieldPath::Own,
            value: value.clone(),
            control: control_for("", value),
        }),
        SettingsNode::Category(entries) => {
            for (key, child) in entries {
                match child {
                    SettingsNode::Leaf(value) => fields.push(FormField {
                        path: FieldPath::Key(key.clone()),
                        value: value.clone(),
                        control: control_for(key, value),
                    }),
                    SettingsNode::Category(nested) => {
                        for (subkey, grandchild) in nested {
                            if let SettingsNode::Leaf(value) = grandchild {
                                fields.push(FormField {
                                    path: FieldPath::Nested {
                                        section: key.clone(),
                                        key: subkey.clone(),
                                    },
                                    value: value.clone(),
                                    control: control_for(subkey, value),
                                });
                            }
                        }
                    }
                }
            }
        }
    }
    fields
}

/// Write one field value into a category node, merging at the edited key
/// and leaving every other entry untouched.
pub fn set_field(node: &mut SettingsNode, path: &FieldPath, value: String) {
    match (node, path) {
        (SettingsNode::Leaf(own), FieldPath::Own) => *own = value,
        (SettingsNode::Category(entries), FieldPath::Key(key)) => {
            entries.insert(key.clone(), SettingsNode::Leaf(value));
        }
        (SettingsNode::Category(entries), FieldPath::Nested { section, key }) => {
            if let Some(SettingsNode::Category(nested)) = entries.get_mut(section) {
                nested.insert(key.clone(), SettingsNode::Leaf(value));
            }
        }
        _ => {}
    }
}
