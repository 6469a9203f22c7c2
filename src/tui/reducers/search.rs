//! Reducer for the search box. Filtering itself is pure
//! (`settings::filter_categories`); this only maintains the query string and
//! keeps the tree cursor inside the filtered row count.

use crate::tui::action::SearchAction;
use crate::tui::effects::Effect;
use crate::tui::state::AppState;

pub fn reduce(state: AppState, action: SearchAction) -> (AppState, Effect) {
    let mut state = state;
    match action {
        SearchAction::Input(c) => state.ui.query.push(c),
        SearchAction::Backspace => {
            state.ui.query.pop();
        }
        SearchAction::Clear => state.ui.query.clear(),
    }
    clamp_cursor(&mut state);
    (state, Effect::None)
}

fn clamp_cursor(state: &mut AppState) {
    let len = state.tree_rows().len();
    if len == 0 {
        state.ui.tree_cursor = 0;
    } else if state.ui.tree_cursor >= len {
        state.ui.tree_cursor = len - 1;
    }
}
