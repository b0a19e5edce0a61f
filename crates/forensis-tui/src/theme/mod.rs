//! Centralized theme system for the laboratory-dark TUI design.
//!
//! This module provides:
//! - `palette` — Raw color constants
//! - `styles` — Semantic style builder functions
//! - `icons` — Unicode glyphs with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
