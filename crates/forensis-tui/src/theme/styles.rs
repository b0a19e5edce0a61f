//! Semantic style builders for the laboratory-dark theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Highlight for the active navigation tab
pub fn nav_selected() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn nav_unselected() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

// --- Blocks ---
/// Rounded bordered container. `condensed` dims the border, used by the
/// header once the panel has been scrolled past the threshold.
pub fn panel_block(condensed: bool) -> Block<'static> {
    let border = if condensed {
        Style::default().fg(palette::BORDER_DIM)
    } else {
        Style::default().fg(palette::BORDER_ACTIVE)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}
