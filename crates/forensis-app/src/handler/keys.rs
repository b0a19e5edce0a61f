//! Key-to-message mapping
//!
//! Keys that target a section produce `Message::Navigate` carrying the
//! section's identifier string, so every input path funnels through the
//! controller's validation exactly like a nav link would.

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;
use forensis_core::Section;

/// Convert a key event into a message, or `None` for unbound keys.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Escape returns home
        InputKey::Esc => Some(navigate_to(Section::Hero)),

        // Cycle through sections in navigation order
        InputKey::Tab => Some(navigate_to(state.store.current_section().next())),
        InputKey::BackTab => Some(navigate_to(state.store.current_section().prev())),

        // Digits jump straight to a section
        InputKey::Char(c @ '1'..='7') => {
            let index = (c as usize) - ('1' as usize);
            Section::from_index(index).map(navigate_to)
        }

        // History navigation
        InputKey::Char('[') | InputKey::Left => Some(Message::HistoryBack),
        InputKey::Char(']') | InputKey::Right => Some(Message::HistoryForward),

        // Panel scrolling
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp(1)),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown(1)),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::ScrollToTop),
        InputKey::End | InputKey::Char('G') => Some(Message::ScrollToBottom),

        // Background animation toggle
        InputKey::Char('m') => Some(Message::ToggleBackground),

        _ => None,
    }
}

fn navigate_to(section: Section) -> Message {
    Message::Navigate {
        section_id: section.as_str().to_string(),
    }
}
