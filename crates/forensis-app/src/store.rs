//! Section store with observer notification
//!
//! The store holds the single piece of mutable UI state (the current
//! section) plus the read-only substance catalog. It performs no validation
//! of its own: the navigation controller is the only writer and screens
//! every request before it reaches `set_current_section`.

use std::cell::RefCell;
use std::rc::Rc;

use forensis_core::{Section, SubstanceCatalog, SubstanceRecord};

/// A component interested in section changes.
pub trait SectionObserver {
    /// Called synchronously after the current section has been assigned.
    fn section_changed(&mut self, section: Section);
}

/// Shared, non-exclusive handle to an observer. Subscribers live in the
/// composition root and may be replaced independently of the store.
pub type SharedObserver = Rc<RefCell<dyn SectionObserver>>;

/// Holds the current section and the substance lookup table, and notifies
/// registered observers on every assignment.
pub struct SectionStore {
    current: Section,
    catalog: SubstanceCatalog,
    observers: Vec<SharedObserver>,
}

impl SectionStore {
    pub fn new(catalog: SubstanceCatalog) -> Self {
        Self {
            current: Section::default(),
            catalog,
            observers: Vec::new(),
        }
    }

    /// Unconditionally assign the current section and notify every observer
    /// in subscription order.
    ///
    /// No validation happens here; callers are trusted to pass a member of
    /// the fixed section set (which the type already guarantees).
    pub fn set_current_section(&mut self, section: Section) {
        self.current = section;
        for observer in &self.observers {
            observer.borrow_mut().section_changed(section);
        }
    }

    pub fn current_section(&self) -> Section {
        self.current
    }

    /// Look up a substance record. Unknown identifiers yield `None`.
    pub fn substance(&self, id: &str) -> Option<&SubstanceRecord> {
        self.catalog.get(id)
    }

    pub fn catalog(&self) -> &SubstanceCatalog {
        &self.catalog
    }

    /// Register an observer. Registering the same observer twice means it is
    /// notified twice per change; the subscriber set is fixed at startup, so
    /// no removal operation exists.
    pub fn add_observer(&mut self, observer: SharedObserver) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl std::fmt::Debug for SectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionStore")
            .field("current", &self.current)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Observer that records every notification it receives.
    struct Recorder {
        label: &'static str,
        seen: Vec<(&'static str, Section)>,
    }

    struct LoggingObserver {
        label: &'static str,
        log: Rc<RefCell<Vec<(&'static str, Section)>>>,
    }

    impl SectionObserver for LoggingObserver {
        fn section_changed(&mut self, section: Section) {
            self.log.borrow_mut().push((self.label, section));
        }
    }

    impl SectionObserver for Recorder {
        fn section_changed(&mut self, section: Section) {
            self.seen.push((self.label, section));
        }
    }

    fn store() -> SectionStore {
        SectionStore::new(SubstanceCatalog::builtin())
    }

    #[test]
    fn test_starts_at_default_section() {
        assert_eq!(store().current_section(), Section::Hero);
    }

    #[test]
    fn test_set_current_section_notifies_each_observer_once() {
        let mut store = store();
        let recorder = Rc::new(RefCell::new(Recorder {
            label: "a",
            seen: Vec::new(),
        }));
        store.add_observer(recorder.clone());

        store.set_current_section(Section::Alcohol);
        store.set_current_section(Section::Blood);

        let seen = &recorder.borrow().seen;
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], ("a", Section::Alcohol));
        assert_eq!(seen[1], ("a", Section::Blood));
    }

    #[test]
    fn test_observers_notified_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        for label in ["first", "second", "third"] {
            store.add_observer(Rc::new(RefCell::new(LoggingObserver {
                label,
                log: log.clone(),
            })));
        }

        store.set_current_section(Section::Drugs);

        let order: Vec<&str> = log.borrow().iter().map(|(label, _)| *label).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_duplicate_registration_yields_duplicate_notifications() {
        let mut store = store();
        let recorder = Rc::new(RefCell::new(Recorder {
            label: "dup",
            seen: Vec::new(),
        }));
        store.add_observer(recorder.clone());
        store.add_observer(recorder.clone());

        store.set_current_section(Section::Cocaine);

        assert_eq!(recorder.borrow().seen.len(), 2);
        assert_eq!(store.observer_count(), 2);
    }

    #[test]
    fn test_substance_lookup() {
        let store = store();
        assert_eq!(store.substance("alcohol").unwrap().formula, "C₂H₅OH");
        assert!(store.substance("nonexistent").is_none());
    }

    #[test]
    fn test_set_current_section_without_observers() {
        let mut store = store();
        store.set_current_section(Section::Methodology);
        assert_eq!(store.current_section(), Section::Methodology);
    }
}
