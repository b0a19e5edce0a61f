//! View state reacting to section changes
//!
//! Holds everything the renderer needs that is not the section itself:
//! which panel is visible, which nav entry is highlighted, the scroll
//! position of the visible panel, and the reveal animation that replays
//! when a new panel appears. Registered with the store as an observer.

use forensis_core::prelude::*;
use forensis_core::Section;

use crate::store::SectionObserver;

/// Suffix used by panels that follow the long naming convention.
pub const PANEL_SUFFIX: &str = "-section";

/// Scroll offset past which the header switches to its condensed style.
pub const SCROLLED_THRESHOLD: usize = 100;

/// Content rows revealed per tick after a section change.
const REVEAL_ROWS_PER_TICK: usize = 3;

/// One registered content panel.
#[derive(Debug, Clone)]
pub struct Panel {
    pub id: String,
    pub visible: bool,
}

/// Scroll position of the visible panel.
///
/// Offsets are rows. `target` drives the smooth scroll: while set, each tick
/// eases the offset a quarter of the remaining distance (at least one row)
/// toward it.
#[derive(Debug, Clone, Default)]
pub struct ScrollState {
    pub offset: usize,
    target: Option<usize>,
    pub content_height: usize,
    pub viewport_height: usize,
}

impl ScrollState {
    /// Begin a smooth scroll to the top of the panel.
    pub fn scroll_into_view(&mut self) {
        self.target = Some(0);
    }

    /// Advance the smooth scroll one frame.
    pub fn tick(&mut self) {
        if let Some(target) = self.target {
            if self.offset == target {
                self.target = None;
                return;
            }
            let distance = self.offset.abs_diff(target);
            let step = (distance / 4).max(1);
            if self.offset > target {
                self.offset -= step;
            } else {
                self.offset += step;
            }
            if self.offset == target {
                self.target = None;
            }
        }
    }

    pub fn max_offset(&self) -> usize {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Manual scrolling cancels any smooth scroll in flight.
    pub fn scroll_up(&mut self, rows: usize) {
        self.target = None;
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: usize) {
        self.target = None;
        self.offset = (self.offset + rows).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.viewport_height.saturating_sub(1).max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    /// Record the sizes seen at render time and clamp the offset to them.
    pub fn update_content_size(&mut self, content_height: usize, viewport_height: usize) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Whether the panel has been scrolled past the fixed threshold.
    pub fn is_scrolled(&self) -> bool {
        self.offset > SCROLLED_THRESHOLD
    }

    /// Scroll progress in `[0, 1]`.
    ///
    /// Content shorter than the viewport has nothing to scroll; report 0.0
    /// instead of dividing by zero.
    pub fn progress(&self) -> f64 {
        let scrollable = self.max_offset();
        if scrollable == 0 {
            return 0.0;
        }
        self.offset as f64 / scrollable as f64
    }
}

/// Staggered reveal of panel content after a section change.
///
/// Stands in for the scroll-reveal animation layer: `refresh` restarts the
/// animation, each tick uncovers a few more rows.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    ticks: u16,
}

impl RevealState {
    pub fn refresh(&mut self) {
        self.ticks = 0;
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
    }

    /// Rows of content currently uncovered.
    pub fn revealed_rows(&self) -> usize {
        self.ticks as usize * REVEAL_ROWS_PER_TICK
    }

    pub fn is_settled(&self, content_height: usize) -> bool {
        self.revealed_rows() >= content_height
    }
}

/// Observer-side view state: panel visibility, nav highlight, scroll and
/// reveal animation.
#[derive(Debug)]
pub struct ViewState {
    panels: Vec<Panel>,
    active_nav: Section,
    pub scroll: ScrollState,
    pub reveal: RevealState,
}

impl ViewState {
    /// Build the default panel registry.
    ///
    /// Half the panels are keyed by the bare slug and half by the suffixed
    /// form, matching the two naming conventions the lookup supports.
    pub fn new() -> Self {
        let ids = Section::ALL
            .iter()
            .map(|section| {
                if section.index() < 4 {
                    section.as_str().to_string()
                } else {
                    format!("{}{}", section.as_str(), PANEL_SUFFIX)
                }
            })
            .collect();
        Self::with_panels(ids)
    }

    /// Build a view over an explicit panel registry.
    pub fn with_panels(ids: Vec<String>) -> Self {
        let mut view = Self {
            panels: ids
                .into_iter()
                .map(|id| Panel { id, visible: false })
                .collect(),
            active_nav: Section::default(),
            scroll: ScrollState::default(),
            reveal: RevealState::default(),
        };
        view.show_section(Section::default());
        view
    }

    /// Hide every panel, then show the one matching the section: first by
    /// bare slug, then by the suffixed convention. A missing panel is a
    /// configuration problem worth logging, never a crash; the nav
    /// highlight updates regardless so the interface stays coherent.
    pub fn show_section(&mut self, section: Section) {
        for panel in &mut self.panels {
            panel.visible = false;
        }

        let bare = section.as_str();
        let suffixed = format!("{bare}{PANEL_SUFFIX}");
        let found = self
            .panels
            .iter()
            .position(|p| p.id == bare)
            .or_else(|| self.panels.iter().position(|p| p.id == suffixed));

        match found {
            Some(index) => {
                self.panels[index].visible = true;
                self.scroll.scroll_into_view();
                self.reveal.refresh();
            }
            None => warn!(section = bare, "no panel registered for section"),
        }

        self.active_nav = section;
    }

    /// Id of the currently visible panel, if any.
    pub fn visible_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|p| p.visible)
            .map(|p| p.id.as_str())
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.panels.iter().any(|p| p.visible && p.id == id)
    }

    /// Section whose nav entry is highlighted.
    pub fn active_nav(&self) -> Section {
        self.active_nav
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionObserver for ViewState {
    fn section_changed(&mut self, section: Section) {
        self.show_section(section);
    }
}
