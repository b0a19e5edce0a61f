//! Navigation controller
//!
//! The single writer of the section store. Every navigation request is
//! validated against the fixed section set before it can touch state;
//! invalid requests are dropped without surfacing an error. Accepted
//! navigations are mirrored into the shareable location history so the
//! current section stays bookmarkable.

use forensis_core::prelude::*;
use forensis_core::Section;

use crate::location::{self, History};
use crate::store::SectionStore;

/// Validates requested section identifiers, updates the store, and keeps
/// the location history in sync.
#[derive(Debug, Default)]
pub struct NavigationController {
    history: History,
}

impl NavigationController {
    pub fn new() -> Self {
        Self {
            history: History::new(),
        }
    }

    /// Membership test against the fixed section set.
    pub fn is_valid_section(&self, id: &str) -> bool {
        Section::parse(id).is_some()
    }

    /// Navigate by identifier string (the form nav inputs produce).
    ///
    /// Unknown identifiers are dropped silently: no state change, no
    /// location push. This keeps the store closed against invalid states.
    pub fn navigate_to_section(&mut self, store: &mut SectionStore, id: &str) {
        match Section::parse(id) {
            Some(section) => self.navigate(store, section),
            None => debug!(id, "dropping navigation request for unknown section"),
        }
    }

    /// Navigate to an already-validated section: update the store (which
    /// notifies its observers), then push the matching location fragment.
    pub fn navigate(&mut self, store: &mut SectionStore, section: Section) {
        store.set_current_section(section);
        self.history.push(location::fragment_for(section));
    }

    /// Startup routing: apply a pre-existing location fragment if it names a
    /// valid section, otherwise leave the default section active.
    pub fn route_initial(&mut self, store: &mut SectionStore, fragment: Option<&str>) {
        let Some(fragment) = fragment else { return };
        let slug = fragment.trim().strip_prefix('#').unwrap_or(fragment.trim());
        if slug.is_empty() {
            return;
        }
        match Section::parse(slug) {
            Some(section) => {
                info!(section = %section, "routing to initial location");
                self.navigate(store, section);
            }
            None => debug!(fragment, "ignoring unrecognized initial location"),
        }
    }

    /// Host back-navigation: move the history cursor and re-derive the
    /// section from the now-current fragment, applying it directly to the
    /// store. No location push happens here; the entry already exists.
    pub fn history_back(&mut self, store: &mut SectionStore) {
        if self.history.back() {
            self.apply_current_location(store);
        }
    }

    /// Host forward-navigation; mirror image of [`Self::history_back`].
    pub fn history_forward(&mut self, store: &mut SectionStore) {
        if self.history.forward() {
            self.apply_current_location(store);
        }
    }

    fn apply_current_location(&mut self, store: &mut SectionStore) {
        // An absent or empty fragment falls back to the default section;
        // anything unrecognized leaves the store untouched.
        if let Some(section) = location::section_from_fragment(self.history.current()) {
            store.set_current_section(section);
        }
    }

    /// Fragment currently at the history cursor.
    pub fn current_fragment(&self) -> &str {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
