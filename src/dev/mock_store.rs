//! Mock settings store for development and testing.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::info;

use crate::fixtures;
use crate::settings::{Partition, SettingsNode, SettingsTree};
use crate::store::{SettingsStore, StoreError};

/// Store that serves fixture data and records updates instead of talking to
/// a server. `failing()` builds one that rejects every update, for driving
/// the error path.
pub struct MockStore {
    tree: SettingsTree,
    fail_updates: bool,
    updates: Mutex<Vec<(Partition, String, SettingsNode)>>,
}

impl MockStore {
    pub fn new() -> Self {
        info!("Creating MockStore for development mode");
        Self {
            tree: fixtures::settings_tree(),
            fail_updates: false,
            updates: Mutex::new(Vec::new()),
        }
    }

    /// A store whose updates are all rejected with a 500.
    pub fn failing() -> Self {
        Self {
            fail_updates: true,
            ..Self::new()
        }
    }

    pub fn with_tree(tree: SettingsTree) -> Self {
        Self {
            tree,
            fail_updates: false,
            updates: Mutex::new(Vec::new()),
        }
    }

    /// Updates accepted so far, in order.
    pub fn recorded_updates(&self) -> Vec<(Partition, String, SettingsNode)> {
        self.updates.lock().unwrap().clone()
    }
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsStore for MockStore {
    async fn fetch(&self) -> Result<SettingsTree, StoreError> {
        info!("MockStore: returning fixture settings tree");
        Ok(self.tree.clone())
    }

    async fn update(
        &self,
        partition: Partition,
        category: &str,
        node: &SettingsNode,
    ) -> Result<(), StoreError> {
        if self.fail_updates {
            info!("MockStore: rejecting update of {}", category);
            return Err(StoreError::Api {
                message: format!("update of {} rejected", category),
                status_code: 500,
            });
        }
        info!("MockStore: accepting update of {}", category);
        self.updates
            .lock()
            .unwrap()
            .push((partition, category.to_string(), node.clone()));
        Ok(())
    }
}
