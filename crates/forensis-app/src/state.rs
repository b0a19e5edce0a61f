//! Application state (Model in TEA pattern)
//!
//! `AppState` is the composition root: it owns the section store, the
//! navigation controller, the shared view state (registered with the store
//! as an observer), and the optional background animation. The background
//! capability is probed exactly once here, at construction.

use std::cell::RefCell;
use std::rc::Rc;

use forensis_core::prelude::*;
use forensis_core::SubstanceCatalog;

use crate::background::{self, MoleculeField};
use crate::config::Settings;
use crate::controller::NavigationController;
use crate::store::SectionStore;
use crate::view::ViewState;

pub struct AppState {
    pub settings: Settings,
    pub store: SectionStore,
    pub controller: NavigationController,
    pub view: Rc<RefCell<ViewState>>,

    /// Decorative animation; `None` when the capability is absent or the
    /// user has toggled it off.
    pub background: Option<MoleculeField>,

    /// Probed once at startup; `toggle_background` consults this instead of
    /// re-probing the environment.
    background_capable: bool,

    pub viewport: (u16, u16),
    should_quit: bool,
}

impl AppState {
    /// Wire up the application: build the store, register the view as an
    /// observer, run startup routing against the initial location fragment,
    /// and start the background animation if the capability is present.
    pub fn new(settings: Settings, initial_fragment: Option<&str>, viewport: (u16, u16)) -> Self {
        let mut store = SectionStore::new(SubstanceCatalog::builtin());
        let mut controller = NavigationController::new();

        let view = Rc::new(RefCell::new(ViewState::new()));
        store.add_observer(view.clone());

        controller.route_initial(&mut store, initial_fragment);

        let background_capable = settings.ui.background && background::animation_capable();
        let background = background_capable.then(|| MoleculeField::new(viewport.0, viewport.1));
        if !background_capable {
            debug!("background animation unavailable, running without it");
        }

        Self {
            settings,
            store,
            controller,
            view,
            background,
            background_capable,
            viewport,
            should_quit: false,
        }
    }

    /// Advance per-frame animation state: background drift, smooth scroll,
    /// content reveal.
    pub fn tick(&mut self) {
        if let Some(field) = &mut self.background {
            field.tick();
        }
        let mut view = self.view.borrow_mut();
        view.scroll.tick();
        view.reveal.tick();
    }

    /// Record the new terminal size and forward it to the background
    /// component when one is active.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        if let Some(field) = &mut self.background {
            field.handle_resize(width, height);
        }
    }

    /// Start or stop the background animation. Starting is only possible
    /// when the startup capability probe succeeded.
    pub fn toggle_background(&mut self) {
        match self.background.take() {
            Some(mut field) => {
                field.destroy();
                info!("background animation stopped");
            }
            None if self.background_capable => {
                self.background = Some(MoleculeField::new(self.viewport.0, self.viewport.1));
                info!("background animation started");
            }
            None => debug!("background animation not available on this terminal"),
        }
    }

    pub fn background_capable(&self) -> bool {
        self.background_capable
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forensis_core::Section;

    fn settings_without_background() -> Settings {
        let mut settings = Settings::default();
        settings.ui.background = false;
        settings
    }

    #[test]
    fn test_startup_without_fragment_stays_on_default() {
        let state = AppState::new(settings_without_background(), None, (80, 24));
        assert_eq!(state.store.current_section(), Section::Hero);
        assert_eq!(state.controller.current_fragment(), "");
    }

    #[test]
    fn test_startup_with_fragment_routes_without_explicit_navigation() {
        let state = AppState::new(settings_without_background(), Some("#cocaine"), (80, 24));
        assert_eq!(state.store.current_section(), Section::Cocaine);
        assert_eq!(state.view.borrow().active_nav(), Section::Cocaine);
        assert_eq!(state.controller.current_fragment(), "#cocaine");
    }

    #[test]
    fn test_startup_with_invalid_fragment_stays_on_default() {
        let state = AppState::new(settings_without_background(), Some("#bogus"), (80, 24));
        assert_eq!(state.store.current_section(), Section::Hero);
    }

    #[test]
    fn test_view_is_registered_as_observer() {
        let mut state = AppState::new(settings_without_background(), None, (80, 24));
        assert_eq!(state.store.observer_count(), 1);

        state.store.set_current_section(Section::Blood);
        assert_eq!(state.view.borrow().active_nav(), Section::Blood);
    }

    #[test]
    fn test_background_disabled_by_settings() {
        let state = AppState::new(settings_without_background(), None, (80, 24));
        assert!(state.background.is_none());
        assert!(!state.background_capable());
    }

    #[test]
    fn test_toggle_background_respects_capability() {
        let mut state = AppState::new(settings_without_background(), None, (80, 24));
        state.toggle_background();
        assert!(state.background.is_none());
    }

    #[test]
    fn test_resize_updates_viewport_without_background() {
        let mut state = AppState::new(settings_without_background(), None, (80, 24));
        state.handle_resize(120, 40);
        assert_eq!(state.viewport, (120, 40));
    }

    #[test]
    fn test_tick_advances_animation_state() {
        let mut state = AppState::new(settings_without_background(), None, (80, 24));
        let before = state.view.borrow().reveal.revealed_rows();
        state.tick();
        assert!(state.view.borrow().reveal.revealed_rows() > before);
    }
}
