//! Widget library for the Forensis TUI

mod background;
mod header;
mod panel;
mod status_bar;
mod substance_table;

pub use background::MoleculeCanvas;
pub use header::Header;
pub use panel::ContentPanel;
pub use status_bar::StatusBar;
pub use substance_table::SubstanceTable;
