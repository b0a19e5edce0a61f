//! # forensis-core - Core Domain Types
//!
//! Foundation crate for Forensis. Provides the section identifier set, the
//! read-only substance catalog, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, the tracing stack).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Section`] - One navigable content panel, drawn from a fixed closed set
//!
//! ### Substance Data (`substances`)
//! - [`SubstanceRecord`] - Immutable chemical reference data for one substance
//! - [`SubstanceCatalog`] - Read-only lookup table, populated at startup
//! - [`PhasePoint`] - Boiling or melting point in degrees Celsius
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use forensis_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod substances;
pub mod types;

/// Prelude for common imports used throughout all Forensis crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use substances::{PhasePoint, SubstanceCatalog, SubstanceRecord};
pub use types::Section;
