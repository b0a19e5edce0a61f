//! Content panel widget
//!
//! Renders the visible section's body with the current scroll offset and
//! the reveal animation: rows past the reveal front stay blank until the
//! animation catches up.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub struct ContentPanel<'a> {
    heading: &'a str,
    lines: &'a [String],
    offset: usize,
    revealed_rows: usize,
}

impl<'a> ContentPanel<'a> {
    pub fn new(heading: &'a str, lines: &'a [String]) -> Self {
        Self {
            heading,
            lines,
            offset: 0,
            revealed_rows: usize::MAX,
        }
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Limit how many rows (counted from the top of the content) are shown.
    pub fn revealed_rows(mut self, rows: usize) -> Self {
        self.revealed_rows = rows;
        self
    }

    fn line_style(text: &str) -> Style {
        // Indented rows are detail text; everything else is body prose.
        if text.starts_with("  ") {
            styles::text_secondary()
        } else {
            styles::text_primary()
        }
    }
}

impl Widget for ContentPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(false)
            .title(format!(" {} ", self.heading))
            .title_style(styles::accent_bold())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let visible: Vec<Line> = self
            .lines
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(inner.height as usize)
            .map(|(index, text)| {
                if index < self.revealed_rows {
                    Line::styled(format!(" {text}"), Self::line_style(text))
                } else {
                    Line::raw("")
                }
            })
            .collect();

        Paragraph::new(visible).render(inner, buf);
    }
}
