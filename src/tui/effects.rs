//! Side effects returned by the reducer, and the handler that turns the
//! data-shaped ones into store calls.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use crate::settings::{Partition, SettingsNode};
use crate::store::SettingsStore;

/// Side effects to run after a reducer step.
pub enum Effect {
    None,
    /// Dispatch a follow-up action.
    Action(Action),
    /// Run a future on the effect executor; its output is dispatched.
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    /// Fetch the settings tree from the store.
    FetchSettings,
    /// Persist one category to the store.
    Save {
        partition: Partition,
        category: String,
        node: SettingsNode,
    },
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Async(_) => write!(f, "Async(..)"),
            Effect::FetchSettings => write!(f, "FetchSettings"),
            Effect::Save {
                partition, category, ..
            } => f
                .debug_struct("Save")
                .field("partition", partition)
                .field("category", category)
                .finish(),
        }
    }
}

/// Effect handler for store operations.
///
/// Each method returns an `Effect::Async` that dispatches the matching
/// completion action when the store call resolves.
pub struct DataEffects {
    store: Arc<dyn SettingsStore>,
}

impl DataEffects {
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    pub fn fetch_settings(&self) -> Effect {
        let store = self.store.clone();
        Effect::Async(Box::pin(async move {
            let result = store.fetch().await;
            Action::SettingsLoaded(result.map_err(|e| e.to_string()))
        }))
    }

    pub fn save_settings(
        &self,
        partition: Partition,
        category: String,
        node: SettingsNode,
    ) -> Effect {
        let store = self.store.clone();
        Effect::Async(Box::pin(async move {
            let result = store.update(partition, &category, &node).await;
            Action::SaveCompleted {
                partition,
                category,
                result: result.map_err(|e| e.to_string()),
            }
        }))
    }
}
