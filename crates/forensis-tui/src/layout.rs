//! Screen layout definitions for the TUI
//!
//! Header with navigation tabs, content panel, one-row status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Header area (title row + navigation tabs inside a bordered block)
    pub header: Rect,

    /// Main content area (the visible section panel)
    pub content: Rect,

    /// Status bar (location fragment, scroll progress, key hints)
    pub status: Rect,
}

/// Header height: top border + title row + tabs row + bottom border
const HEADER_HEIGHT: u16 = 4;

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let constraints = [
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ];

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        content: chunks[1],
        status: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_areas() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area);

        assert_eq!(layout.header.height, 4);
        assert_eq!(layout.status.height, 1);
        assert_eq!(layout.content.height, 19); // 24 - 4 - 1
        assert_eq!(layout.content.y, 4);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create(area);
        assert_eq!(
            layout.header.height + layout.content.height + layout.status.height,
            area.height
        );
    }

    #[test]
    fn test_tiny_terminal_does_not_underflow() {
        let area = Rect::new(0, 0, 10, 3);
        let layout = create(area);
        assert!(layout.content.height <= area.height);
    }
}
