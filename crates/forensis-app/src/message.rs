//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (animations, smooth scroll)
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Request to show a section, identified the way nav inputs name it.
    /// Validated by the navigation controller; unknown ids are dropped.
    Navigate { section_id: String },

    /// Host back-navigation (history cursor moves back)
    HistoryBack,

    /// Host forward-navigation (history cursor moves forward)
    HistoryForward,

    // ─────────────────────────────────────────────────────────
    // Scroll Messages
    // ─────────────────────────────────────────────────────────
    /// Scroll the visible panel up n rows
    ScrollUp(usize),
    /// Scroll the visible panel down n rows
    ScrollDown(usize),
    /// Page up in the visible panel
    PageUp,
    /// Page down in the visible panel
    PageDown,
    /// Jump to the top of the visible panel
    ScrollToTop,
    /// Jump to the bottom of the visible panel
    ScrollToBottom,

    /// Start or stop the decorative background animation
    ToggleBackground,

    /// Quit the application
    Quit,
}
