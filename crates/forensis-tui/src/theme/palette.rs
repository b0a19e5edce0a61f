//! Color palette for the laboratory-dark theme.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black; // Terminal background
pub const CARD_BG: Color = Color::Black; // Panel/card backgrounds

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray; // Inactive borders
pub const BORDER_ACTIVE: Color = Color::Cyan; // Focused borders

// --- Accent ---
pub const ACCENT: Color = Color::Cyan; // Primary accent (nav highlight)

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Scroll progress gauge ---
pub const GAUGE_FILLED: Color = Color::Cyan;
pub const GAUGE_EMPTY: Color = Color::DarkGray;

// --- Molecule field atom colors, indexed by color slot ---
pub const ATOM_COLORS: [Color; 5] = [
    Color::Rgb(0x00, 0xd4, 0xff), // electric cyan
    Color::Rgb(0xff, 0x6b, 0x6b), // coral red
    Color::Rgb(0x4e, 0xcd, 0xc4), // teal
    Color::Rgb(0xff, 0xe6, 0x6d), // pale yellow
    Color::Rgb(0xa8, 0xe6, 0xcf), // mint green
];

/// Bond lines between atoms
pub const BOND_COLOR: Color = Color::Rgb(0x66, 0x66, 0x66);
