//! Status bar widget
//!
//! One row: the shareable location on the left, key hints in the middle,
//! the scroll progress gauge on the right.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons::IconSet, palette, styles};

const GAUGE_CELLS: usize = 10;

pub struct StatusBar<'a> {
    fragment: &'a str,
    progress: f64,
    can_back: bool,
    can_forward: bool,
    icons: IconSet,
}

impl<'a> StatusBar<'a> {
    pub fn new(fragment: &'a str, progress: f64, icons: IconSet) -> Self {
        Self {
            fragment,
            progress,
            can_back: false,
            can_forward: false,
            icons,
        }
    }

    pub fn history(mut self, can_back: bool, can_forward: bool) -> Self {
        self.can_back = can_back;
        self.can_forward = can_forward;
        self
    }

    fn location_line(&self) -> Line<'_> {
        let shown = if self.fragment.is_empty() {
            "/"
        } else {
            self.fragment
        };
        let arrow = |available: bool, glyph: &'static str| {
            if available {
                Span::styled(glyph, styles::text_secondary())
            } else {
                Span::styled(glyph, styles::text_muted())
            }
        };
        Line::from(vec![
            Span::raw(" "),
            arrow(self.can_back, self.icons.back()),
            Span::raw(" "),
            arrow(self.can_forward, self.icons.forward()),
            Span::raw("  "),
            Span::styled(self.icons.location(), styles::accent()),
            Span::raw(" "),
            Span::styled(shown, styles::accent()),
        ])
    }

    fn gauge_line(&self) -> Line<'static> {
        let ratio = self.progress.clamp(0.0, 1.0);
        let filled = (ratio * GAUGE_CELLS as f64).round() as usize;
        let percent = (ratio * 100.0).round() as usize;
        Line::from(vec![
            Span::styled(
                "▰".repeat(filled),
                ratatui::style::Style::default().fg(palette::GAUGE_FILLED),
            ),
            Span::styled(
                "▱".repeat(GAUGE_CELLS - filled),
                ratatui::style::Style::default().fg(palette::GAUGE_EMPTY),
            ),
            Span::styled(format!(" {percent:>3}% "), styles::text_muted()),
        ])
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::horizontal([
            Constraint::Length(30),
            Constraint::Min(10),
            Constraint::Length(17),
        ])
        .split(area);

        Paragraph::new(self.location_line()).render(chunks[0], buf);

        let hints = Line::styled(
            "Tab next · 1-7 jump · [/] history · m molecules · q quit",
            styles::text_muted(),
        );
        Paragraph::new(hints)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(self.gauge_line())
            .alignment(Alignment::Right)
            .render(chunks[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(bar: StatusBar, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf.cell((x, 0)).map(|c| c.symbol()).unwrap_or(" ")).collect()
    }

    #[test]
    fn test_shows_fragment() {
        let icons = IconSet::new(true);
        let text = render_to_string(StatusBar::new("#alcohol", 0.0, icons), 120);
        assert!(text.contains("#alcohol"));
    }

    #[test]
    fn test_empty_fragment_shows_bare_address() {
        let icons = IconSet::new(true);
        let text = render_to_string(StatusBar::new("", 0.0, icons), 120);
        assert!(text.contains("# /"));
    }

    #[test]
    fn test_gauge_reflects_progress() {
        let icons = IconSet::new(true);
        let text = render_to_string(StatusBar::new("#blood", 0.5, icons), 120);
        assert!(text.contains("50%"));
        assert!(text.contains("▰▰▰▰▰▱▱▱▱▱"));

        let text = render_to_string(StatusBar::new("#blood", 0.0, icons), 120);
        assert!(text.contains("0%"));
    }
}
