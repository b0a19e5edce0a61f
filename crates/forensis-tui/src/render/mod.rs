//! Main render/view function (View in TEA pattern)

use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use forensis_app::state::AppState;
use forensis_core::Section;

use crate::theme::{icons::IconSet, palette, styles};
use crate::widgets::{ContentPanel, Header, MoleculeCanvas, StatusBar, SubstanceTable};
use crate::{content, layout};

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it only writes back the content and
/// viewport sizes the scroll state needs to clamp itself.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    // Fill entire terminal with the deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.ascii_icons);

    let section = state.store.current_section();
    let heading = content::heading(section);
    let lines = content::body(section, state.store.catalog());

    let mut view = state.view.borrow_mut();
    let viewport_rows = areas.content.height.saturating_sub(2) as usize;
    view.scroll.update_content_size(lines.len(), viewport_rows);

    let header = Header::new(view.active_nav(), view.scroll.is_scrolled(), icons);
    frame.render_widget(header, areas.header);

    match view.visible_panel() {
        // Already logged as a configuration problem; keep the app usable.
        None => {
            let placeholder = Paragraph::new(Line::styled(
                "This content panel is unavailable.",
                styles::text_muted(),
            ))
            .alignment(Alignment::Center)
            .block(styles::panel_block(false));
            frame.render_widget(placeholder, areas.content);
        }

        Some(_) if section == Section::Hero => {
            // Molecule field behind a centered hero card
            if let Some(field) = &state.background {
                frame.render_widget(MoleculeCanvas::new(field), areas.content);
            }
            let card = centered_rect(areas.content, 58, lines.len() as u16 + 2);
            frame.render_widget(Clear, card);
            frame.render_widget(
                ContentPanel::new(&heading, &lines)
                    .offset(view.scroll.offset)
                    .revealed_rows(view.reveal.revealed_rows()),
                card,
            );
        }

        Some(_) if section == Section::AdditionalSubstances => {
            frame.render_widget(
                SubstanceTable::new(state.store.catalog(), &heading),
                areas.content,
            );
        }

        Some(_) => {
            frame.render_widget(
                ContentPanel::new(&heading, &lines)
                    .offset(view.scroll.offset)
                    .revealed_rows(view.reveal.revealed_rows()),
                areas.content,
            );
        }
    }

    let history = state.controller.history();
    let status = StatusBar::new(state.controller.current_fragment(), view.scroll.progress(), icons)
        .history(history.can_back(), history.can_forward());
    frame.render_widget(status, areas.status);
}

/// Rect of at most `width` x `height`, centered inside `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
