//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key-to-message mapping
//! - `scroll`: Scroll handlers

pub(crate) mod keys;
pub(crate) mod scroll;
pub(crate) mod update;

use crate::message::Message;

// Re-export main entry point
pub use update::update;

/// Result of processing one message.
#[derive(Debug, Clone, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
