//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{keys, scroll, UpdateResult};

/// Process a message and update state.
/// Returns an optional follow-up message for the event loop to feed back.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match keys::handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Navigate { section_id } => {
            state
                .controller
                .navigate_to_section(&mut state.store, &section_id);
            UpdateResult::none()
        }

        Message::HistoryBack => {
            state.controller.history_back(&mut state.store);
            UpdateResult::none()
        }

        Message::HistoryForward => {
            state.controller.history_forward(&mut state.store);
            UpdateResult::none()
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Resize { width, height } => {
            state.handle_resize(width, height);
            UpdateResult::none()
        }

        Message::ToggleBackground => {
            state.toggle_background();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Scroll Messages
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp(rows) => scroll::handle_scroll_up(state, rows),
        Message::ScrollDown(rows) => scroll::handle_scroll_down(state, rows),
        Message::PageUp => scroll::handle_page_up(state),
        Message::PageDown => scroll::handle_page_down(state),
        Message::ScrollToTop => scroll::handle_scroll_to_top(state),
        Message::ScrollToBottom => scroll::handle_scroll_to_bottom(state),
    }
}
