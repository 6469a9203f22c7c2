//! Runtime - owns the state, dispatches actions through the reducer, and
//! executes side effects asynchronously.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::effects::{DataEffects, Effect};
use super::reducer::reduce;
use super::state::AppState;

pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Store effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action through the reducer and execute the resulting
    /// effect. Uses mem::take so the reducer can own the state without a
    /// clone.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);
        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;
        self.execute_effect(effect);
    }

    /// Resolve data-shaped effects against the store handler; queue the rest
    /// for the async executor.
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::FetchSettings => {
                debug!("EFFECT: Fetching settings tree");
                let fetch = self.data_effects.fetch_settings();
                let _ = self.effect_tx.send(fetch);
            }
            Effect::Save {
                partition,
                category,
                node,
            } => {
                debug!("EFFECT: Saving {}/{}", partition.wire_name(), category);
                let save = self.data_effects.save_settings(partition, category, node);
                let _ = self.effect_tx.send(save);
            }
            Effect::Action(_) | Effect::Async(_) => {
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue.
    ///
    /// Returns the number of actions processed.
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Get a sender for dispatching actions from external sources.
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(effect) = effect_rx.recv().await {
            Self::process_effect_async(effect, &action_tx);
        }
    }

    fn process_effect_async(effect: Effect, action_tx: &mpsc::UnboundedSender<Action>) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tokio::spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Data effects are resolved by execute_effect() before queueing.
            Effect::FetchSettings | Effect::Save { .. } => {
                tracing::warn!("Data effect reached async executor unresolved");
            }
        }
    }
}
