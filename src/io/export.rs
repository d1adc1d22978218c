//! Export a rendered pixmap as a binary PGM (P5) file.
//!
//! PGM keeps the export dependency-free and is readable by effectively every
//! image tool. The barcode is monochrome anyway, so one gray channel is all
//! we need.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;
use crate::render::{PixmapSurface, Surface};

/// Write the surface as binary PGM.
pub fn write_pgm(path: &Path, surface: &PixmapSurface) -> Result<(), AppError> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(AppError::usage("Refusing to export an empty surface."));
    }

    let mut file = File::create(path).map_err(|e| {
        AppError::runtime(format!("Failed to create PGM '{}': {e}", path.display()))
    })?;

    write!(file, "P5\n{} {}\n255\n", surface.width(), surface.height())
        .map_err(|e| AppError::runtime(format!("Failed to write PGM header: {e}")))?;
    file.write_all(surface.data())
        .map_err(|e| AppError::runtime(format!("Failed to write PGM pixels: {e}")))?;

    Ok(())
}
