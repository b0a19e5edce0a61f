//! Shareable location state
//!
//! The current section round-trips through a location fragment (the
//! bookmarkable part of the address). The default section maps to an empty
//! fragment; every other section maps to `#<slug>`. The [`History`] stack
//! stands in for the host environment's navigable history: pushing a new
//! location truncates any forward entries, and back/forward move a cursor
//! without mutating the entries.

use forensis_core::Section;

/// Encode a section as a location fragment.
///
/// The default section is represented by the bare address (empty fragment);
/// all others by `#<slug>`.
pub fn fragment_for(section: Section) -> String {
    if section.is_default() {
        String::new()
    } else {
        format!("#{}", section.as_str())
    }
}

/// Decode a location fragment back into a section.
///
/// A leading `#` is optional. An empty fragment denotes the default section.
/// Anything outside the fixed section set yields `None`.
pub fn section_from_fragment(fragment: &str) -> Option<Section> {
    let slug = fragment.strip_prefix('#').unwrap_or(fragment);
    if slug.is_empty() {
        return Some(Section::default());
    }
    Section::parse(slug)
}

/// Navigable history of location fragments.
///
/// Starts with a single entry for the bare address. `push` behaves like the
/// host history stack: it drops entries ahead of the cursor and appends.
/// Pushing the fragment already at the cursor is a no-op, so repeated
/// navigation to the same section does not pile up duplicate entries.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: vec![String::new()],
            index: 0,
        }
    }

    /// Fragment at the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Push a fragment, truncating any forward entries.
    pub fn push(&mut self, fragment: impl Into<String>) {
        let fragment = fragment.into();
        if self.current() == fragment {
            return;
        }
        self.entries.truncate(self.index + 1);
        self.entries.push(fragment);
        self.index = self.entries.len() - 1;
    }

    /// Move the cursor back one entry. Returns `false` at the oldest entry.
    pub fn back(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Move the cursor forward one entry. Returns `false` at the newest.
    pub fn forward(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn can_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
