//! Root reducer - routes actions to the per-concern reducers.
//!
//! Reducers take ownership of the state and return the new state plus an
//! effect; they never perform IO themselves.

use super::action::Action;
use super::effects::Effect;
use super::reducers;
use super::state::AppState;

pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::RefreshSettings => reducers::data::refresh(state),
        Action::SettingsLoaded(result) => reducers::data::settings_loaded(state, result),
        Action::SaveCompleted {
            partition,
            category,
            result,
        } => reducers::data::save_completed(state, partition, category, result),
        Action::DirtyChanged {
            partition,
            category,
            dirty,
        } => reducers::data::dirty_changed(state, partition, category, dirty),

        Action::SetFocus(focus) => {
            let mut state = state;
            state.ui.focus = focus;
            (state, Effect::None)
        }
        Action::FocusNext => {
            let mut state = state;
            state.ui.focus = state.ui.focus.next();
            (state, Effect::None)
        }
        Action::FocusPrev => {
            let mut state = state;
            state.ui.focus = state.ui.focus.prev();
            (state, Effect::None)
        }

        Action::Tree(action) => reducers::tree::reduce(state, action),
        Action::Form(action) => reducers::form::reduce(state, action),
        Action::Search(action) => reducers::search::reduce(state, action),

        Action::Quit => (state, Effect::None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::Focus;

    #[test]
    fn test_set_focus() {
        let state = AppState::default();
        let (state, _) = reduce(state, Action::SetFocus(Focus::Form));
        assert_eq!(state.ui.focus, Focus::Form);
    }

    #[test]
    fn test_focus_next_cycles() {
        let state = AppState::default();
        assert_eq!(state.ui.focus, Focus::Tree);

        let (state, _) = reduce(state, Action::FocusNext);
        assert_eq!(state.ui.focus, Focus::Form);

        let (state, _) = reduce(state, Action::FocusNext);
        assert_eq!(state.ui.focus, Focus::Search);
    }

    #[test]
    fn test_refresh_requests_fetch_effect() {
        let state = AppState::default();
        let (state, effect) = reduce(state, Action::RefreshSettings);
        assert!(state.data.loading);
        assert!(matches!(effect, Effect::FetchSettings));
    }
}
