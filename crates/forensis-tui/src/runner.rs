//! Main TUI runner - entry point and event loop
//!
//! Contains the application lifecycle:
//! - `run`: terminal setup, state construction, teardown
//! - `run_loop`: synchronous draw -> poll -> update loop

use forensis_app::{handler, AppState, Message, Settings};
use forensis_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI application.
///
/// `initial_fragment` is the location fragment the process was started
/// with (the deep link), if any.
pub fn run(settings: Settings, initial_fragment: Option<&str>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let size = term.size()?;

    let mut state = AppState::new(settings, initial_fragment, (size.width, size.height));
    info!(
        background = state.background.is_some(),
        "terminal interface ready"
    );

    let result = run_loop(&mut term, &mut state);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    info!("shutting down");
    Ok(())
}

/// Apply a message plus any follow-up messages it produces.
pub fn process_message(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = handler::update(state, msg).message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forensis_app::InputKey;
    use forensis_core::Section;

    fn test_state() -> AppState {
        let mut settings = Settings::default();
        settings.ui.background = false;
        AppState::new(settings, None, (80, 24))
    }

    #[test]
    fn test_process_message_follows_chain() {
        // A key press expands into a navigation message and is applied in
        // the same call.
        let mut state = test_state();
        process_message(&mut state, Message::Key(InputKey::Char('3')));
        assert_eq!(state.store.current_section(), Section::Alcohol);
    }

    #[test]
    fn test_quit_key_stops_loop_condition() {
        let mut state = test_state();
        process_message(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.should_quit());
    }
}
