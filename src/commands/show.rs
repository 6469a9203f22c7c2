//! `show` command - fetch the settings tree and print it to stdout.

use anyhow::Context;

use crate::settings::{format, Partition, SettingsNode, SettingsTree};
use crate::store::SettingsStore;

pub async fn run(store: &dyn SettingsStore, as_json: bool) -> anyhow::Result<()> {
    let tree = store.fetch().await.context("failed to fetch settings")?;
    if as_json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
    } else {
        print!("{}", render_tree_text(&tree));
    }
    Ok(())
}

/// Plain-text rendering of the full tree, one partition per section with
/// keys aligned per category.
pub fn render_tree_text(tree: &SettingsTree) -> String {
    let mut out = String::new();
    for partition in Partition::ALL {
        let entries = tree.partition(partition);
        if entries.is_empty() {
            continue;
        }
        out.push_str(partition.title());
        out.push('\n');
        out.push_str(&"=".repeat(partition.title().len()));
        out.push('\n');
        for (category, node) in entries {
            out.push_str(&format::category_label(category));
            out.push('\n');
            render_node(&mut out, node, 1);
        }
        out.push('\n');
    }
    out
}

fn render_node(out: &mut String, node: &SettingsNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        SettingsNode::Leaf(value) => {
            out.push_str(&indent);
            out.push_str(value);
            out.push('\n');
        }
        SettingsNode::Category(entries) => {
            let width = entries
                .iter()
                .filter(|(_, child)| matches!(child, SettingsNode::Leaf(_)))
                .map(|(key, _)| format::field_label(key).len())
                .max()
                .unwrap_or(0);
            for (key, child) in entries {
                match child {
                    SettingsNode::Leaf(value) => {
                        out.push_str(&indent);
                        let label = format::field_label(key);
                        out.push_str(&format!("{label:<width$}  {value}\n"));
                    }
                    SettingsNode::Category(_) => {
                        out.push_str(&indent);
                        out.push_str(&format::submenu_label(key));
                        out.push('\n');
                        render_node(out, child, depth + 1);
                    }
                }
            }
        }
    }
}
