//! Deterministic fixture data shared by tests, development mock mode and
//! benchmarks.
//!
//! The tree mirrors a realistic dispatch server configuration: the `client`
//! partition carries SDK, dispatcher and executor-plugin settings, the
//! `server` partition the service endpoints.

use std::collections::BTreeMap;

use crate::settings::{SettingsNode, SettingsTree};

fn leaf(value: &str) -> SettingsNode {
    SettingsNode::Leaf(value.to_string())
}

fn category(entries: &[(&str, SettingsNode)]) -> SettingsNode {
    SettingsNode::Category(
        entries
            .iter()
            .map(|(key, node)| (key.to_string(), node.clone()))
            .collect(),
    )
}

/// A full settings tree with every control type represented: booleans,
/// the log-level enum, free text and one level of nested executor configs.
pub fn settings_tree() -> SettingsTree {
    let client: BTreeMap<String, SettingsNode> = [
        (
            "sdk".to_string(),
            category(&[
                ("enable_logging", leaf("false")),
                ("executor_dir", leaf("~/.config/dispatch/executor_plugins")),
                ("log_dir", leaf("~/.cache/dispatch")),
                ("log_level", leaf("warning")),
                ("no_cluster", leaf("true")),
            ]),
        ),
        (
            "dispatcher".to_string(),
            category(&[
                ("address", leaf("localhost")),
                ("port", leaf("48008")),
                ("cache_dir", leaf("~/.cache/dispatch")),
                ("results_dir", leaf("results")),
                ("log_dir", leaf("~/.cache/dispatch")),
            ]),
        ),
        (
            "executors".to_string(),
            category(&[
                (
                    "local",
                    category(&[
                        ("cache_dir", leaf("~/.cache/dispatch")),
                        ("log_stdout", leaf("stdout.log")),
                        ("log_stderr", leaf("stderr.log")),
                    ]),
                ),
                (
                    "dask",
                    category(&[
                        ("cache_dir", leaf("~/.cache/dispatch")),
                        ("log_stdout", leaf("stdout.log")),
                        ("log_stderr", leaf("stderr.log")),
                    ]),
                ),
            ]),
        ),
        (
            "workflow_data".to_string(),
            category(&[
                ("storage_type", leaf("local")),
                ("base_dir", leaf("~/.local/share/dispatch/workflow_data")),
            ]),
        ),
    ]
    .into_iter()
    .collect();

    let server: BTreeMap<String, SettingsNode> = [
        (
            "service".to_string(),
            category(&[
                ("address", leaf("0.0.0.0")),
                ("port", leaf("48008")),
                ("dev_mode", leaf("false")),
            ]),
        ),
        (
            "triggers".to_string(),
            category(&[("address", leaf("localhost")), ("port", leaf("48009"))]),
        ),
    ]
    .into_iter()
    .collect();

    SettingsTree { client, server }
}
