//! General test utilities for TUI tests.
//!
//! Widget tests build their own buffers; these helpers cover the
//! runtime-level tests that drive a full fetch/edit/save flow against the
//! fixture-backed mock store.

use std::sync::Arc;

use crate::dev::MockStore;
use crate::tui::effects::DataEffects;
use crate::tui::runtime::Runtime;
use crate::tui::state::AppState;

/// Runtime wired to a fixture-backed store that accepts updates.
pub fn create_runtime() -> Runtime {
    runtime_with_store(Arc::new(MockStore::new()))
}

/// Runtime wired to a store that rejects every update.
pub fn create_failing_runtime() -> Runtime {
    runtime_with_store(Arc::new(MockStore::failing()))
}

pub fn runtime_with_store(store: Arc<MockStore>) -> Runtime {
    let data_effects = Arc::new(DataEffects::new(store));
    Runtime::new(AppState::default(), data_effects)
}

pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(tokio::time::Duration::from_millis(ms)).await;
}

/// Pump the action queue until `done` holds or a short timeout elapses.
/// Returns whether the predicate was satisfied.
pub async fn process_until(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) -> bool {
    for _ in 0..100 {
        runtime.process_actions();
        if done(runtime.state()) {
            return true;
        }
        sleep_ms(10).await;
    }
    false
}
