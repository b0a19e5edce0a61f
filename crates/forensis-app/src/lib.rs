//! forensis-app - Application state and orchestration for Forensis
//!
//! Implements the navigation core: the section store with its observer list,
//! the validating navigation controller with browser-style location history,
//! the view state that reacts to section changes, the molecule-field
//! animation state, and the TEA-style message/update machinery the terminal
//! frontend drives.

pub mod background;
pub mod config;
pub mod controller;
pub mod handler;
pub mod input_key;
pub mod location;
pub mod message;
pub mod state;
pub mod store;
pub mod view;

// Re-export primary types
pub use background::MoleculeField;
pub use config::Settings;
pub use controller::NavigationController;
pub use handler::{update, UpdateResult};
pub use input_key::InputKey;
pub use location::History;
pub use message::Message;
pub use state::AppState;
pub use store::{SectionObserver, SectionStore, SharedObserver};
pub use view::ViewState;
