//! Barcode rendering: pure layout plus pluggable drawing surfaces.
//!
//! The split mirrors the rest of the crate: `layout` computes a
//! [`crate::domain::BarPattern`] with no side effects, and `draw`/`render`
//! push that pattern onto whatever [`Surface`] backend the caller owns
//! (in-memory pixmap, terminal chart, ...).

mod barcode;
mod font;
mod preview;
mod surface;

pub use barcode::{draw, layout, render};
pub use preview::ascii_preview;
pub use surface::{PixmapSurface, Surface, SHADE_BLACK, SHADE_WHITE};
