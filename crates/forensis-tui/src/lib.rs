//! forensis-tui - Terminal UI for Forensis
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! screen layout, the render function, widgets, and the main event loop.

pub mod content;
pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
