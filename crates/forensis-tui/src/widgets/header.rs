//! Header widget: application title and navigation tabs

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Tabs, Widget},
};

use forensis_core::Section;

use crate::theme::{icons::IconSet, palette, styles};

/// Bordered header with the application title on the first row and the
/// section tabs on the second. The border dims once the panel below has
/// been scrolled past the threshold.
pub struct Header {
    active: Section,
    scrolled: bool,
    icons: IconSet,
}

impl Header {
    pub fn new(active: Section, scrolled: bool, icons: IconSet) -> Self {
        Self {
            active,
            scrolled,
            icons,
        }
    }

    fn tab_titles() -> Vec<Line<'static>> {
        Section::ALL
            .iter()
            .map(|section| Line::from(format!(" {} ", section.title())))
            .collect()
    }
}

impl Widget for Header {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::panel_block(self.scrolled).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Title row
        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.flask(), styles::accent()),
            Span::styled(" Forensis", styles::accent_bold()),
            Span::styled("  Forensic Chemistry Reference", styles::text_muted()),
        ]);
        let title_area = Rect {
            height: 1,
            ..inner
        };
        Paragraph::new(title).render(title_area, buf);

        // Tabs row
        if inner.height >= 2 {
            let tabs_area = Rect {
                y: inner.y + 1,
                height: 1,
                x: inner.x + 1,
                width: inner.width.saturating_sub(2),
            };
            Tabs::new(Self::tab_titles())
                .select(self.active.index())
                .style(styles::nav_unselected())
                .highlight_style(styles::nav_selected())
                .divider("│")
                .render(tabs_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(header: Header, width: u16) -> String {
        let area = Rect::new(0, 0, width, 4);
        let mut buf = Buffer::empty(area);
        header.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_header_shows_title_and_tabs() {
        let icons = IconSet::new(true);
        let text = render_to_string(Header::new(Section::Hero, false, icons), 120);
        assert!(text.contains("Forensis"));
        assert!(text.contains("Methodology"));
        assert!(text.contains("Cocaine"));
    }

    #[test]
    fn test_header_survives_tiny_area() {
        let icons = IconSet::new(true);
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        Header::new(Section::Hero, false, icons).render(area, &mut buf);
    }
}
