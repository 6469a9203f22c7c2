// Module declarations
pub mod action;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod runtime;
pub mod state;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;

#[cfg(test)]
mod integration_tests;

pub use action::{Action, FormAction, SearchAction, TreeAction};
pub use effects::{DataEffects, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::store::SettingsStore;

/// Main entry point for TUI mode
pub async fn run(store: Arc<dyn SettingsStore>, config: Config) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(store));

    let mut initial_state = AppState::default();
    initial_state.system.config = config;
    initial_state.system.reset_status_message();

    let mut runtime = Runtime::new(initial_state, data_effects);

    // The tree is fetched once on startup.
    runtime.dispatch(Action::RefreshSettings);

    // Main loop
    loop {
        // Process any completed effects first so data loads re-render
        // immediately.
        let actions_processed = runtime.process_actions();

        terminal.draw(|f| view::draw(f, runtime.state()))?;

        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                let action = key_to_action(key, runtime.state());

                let should_quit = matches!(action, Some(Action::Quit));
                if let Some(action) = action {
                    runtime.dispatch(action);
                }
                if should_quit {
                    tracing::debug!("ACTION: Quitting application");
                    break;
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}
