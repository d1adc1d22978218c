//! Shared domain types.
//!
//! Everything the CLI, TUI, and exports need to agree on lives here:
//! registration inputs, derived codes, and barcode geometry.

mod types;

pub use types::*;
