//! End-to-end navigation behavior over the composed application state.

use std::cell::RefCell;
use std::rc::Rc;

use forensis_app::{update, AppState, InputKey, Message, SectionObserver, Settings};
use forensis_core::Section;

fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.ui.background = false;
    settings
}

fn state_with_fragment(fragment: Option<&str>) -> AppState {
    AppState::new(settings(), fragment, (80, 24))
}

fn drive(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next {
        next = update(state, msg).message;
    }
}

fn navigate(state: &mut AppState, id: &str) {
    drive(
        state,
        Message::Navigate {
            section_id: id.to_string(),
        },
    );
}

#[test]
fn startup_without_fragment_lands_on_hero() {
    let state = state_with_fragment(None);
    assert_eq!(state.store.current_section(), Section::Hero);
    assert_eq!(state.controller.current_fragment(), "");
}

#[test]
fn startup_fragment_routes_without_explicit_navigation() {
    let state = state_with_fragment(Some("#cocaine"));
    assert_eq!(state.store.current_section(), Section::Cocaine);
    assert_eq!(state.view.borrow().active_nav(), Section::Cocaine);
}

#[test]
fn accepted_navigation_updates_state_view_and_location() {
    let mut state = state_with_fragment(None);
    navigate(&mut state, "alcohol");

    assert_eq!(state.store.current_section(), Section::Alcohol);
    assert_eq!(state.controller.current_fragment(), "#alcohol");
    assert_eq!(state.view.borrow().visible_panel(), Some("alcohol"));
    assert_eq!(
        state.store.substance("alcohol").unwrap().formula,
        "C₂H₅OH"
    );
}

#[test]
fn rejected_navigation_changes_nothing() {
    let mut state = state_with_fragment(None);
    navigate(&mut state, "alcohol");
    navigate(&mut state, "nonexistent");

    assert_eq!(state.store.current_section(), Section::Alcohol);
    assert_eq!(state.controller.current_fragment(), "#alcohol");
    assert_eq!(state.controller.history().len(), 2);
}

#[test]
fn fragment_round_trip_recovers_section() {
    let mut first = state_with_fragment(None);
    navigate(&mut first, "drugs");
    let fragment = first.controller.current_fragment().to_string();

    let second = state_with_fragment(Some(&fragment));
    assert_eq!(second.store.current_section(), Section::Drugs);
}

#[test]
fn every_observer_sees_each_accepted_navigation_once() {
    struct Counter {
        notifications: Vec<Section>,
    }
    impl SectionObserver for Counter {
        fn section_changed(&mut self, section: Section) {
            self.notifications.push(section);
        }
    }

    let mut state = state_with_fragment(None);
    let counter = Rc::new(RefCell::new(Counter {
        notifications: Vec::new(),
    }));
    state.store.add_observer(counter.clone());

    navigate(&mut state, "blood");
    navigate(&mut state, "bogus");
    navigate(&mut state, "hero");

    let seen = &counter.borrow().notifications;
    assert_eq!(seen.as_slice(), &[Section::Blood, Section::Hero]);
}

#[test]
fn history_keys_walk_back_and_forward() {
    let mut state = state_with_fragment(None);
    navigate(&mut state, "methodology");
    navigate(&mut state, "cocaine");

    drive(&mut state, Message::Key(InputKey::Char('[')));
    assert_eq!(state.store.current_section(), Section::Methodology);

    drive(&mut state, Message::Key(InputKey::Char('[')));
    assert_eq!(state.store.current_section(), Section::Hero);
    assert_eq!(state.controller.current_fragment(), "");

    drive(&mut state, Message::Key(InputKey::Char(']')));
    assert_eq!(state.store.current_section(), Section::Methodology);
    assert_eq!(state.controller.current_fragment(), "#methodology");
}

#[test]
fn keyboard_cycle_covers_every_section() {
    let mut state = state_with_fragment(None);
    let mut seen = vec![state.store.current_section()];
    for _ in 0..Section::ALL.len() - 1 {
        drive(&mut state, Message::Key(InputKey::Tab));
        seen.push(state.store.current_section());
    }
    assert_eq!(seen, Section::ALL.to_vec());

    drive(&mut state, Message::Key(InputKey::Tab));
    assert_eq!(state.store.current_section(), Section::Hero);
}

#[test]
fn escape_returns_home_from_anywhere() {
    let mut state = state_with_fragment(Some("#additional-substances"));
    drive(&mut state, Message::Key(InputKey::Esc));
    assert_eq!(state.store.current_section(), Section::Hero);
    assert_eq!(state.controller.current_fragment(), "");
}
