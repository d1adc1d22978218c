//! Drawing-surface capability and the reference pixmap backend.

use crate::render::font;

/// Opaque foreground shade (8-bit luma).
pub const SHADE_BLACK: u8 = 0x00;
/// Background shade.
pub const SHADE_WHITE: u8 = 0xFF;

/// An owned, mutable 2D raster target.
///
/// The barcode renderer only needs these four operations, which keeps the
/// bar logic portable across backends. Coordinates are top-left origin,
/// y growing downward. Out-of-bounds writes are clipped, not errors.
pub trait Surface {
    /// Set the surface dimensions, discarding previous contents.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the whole surface with one shade.
    fn clear(&mut self, shade: u8);

    /// Fill an axis-aligned rectangle, clipped to the surface.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, shade: u8);

    /// Draw `text` horizontally centered on `center_x`, with the glyph
    /// baseline sitting on `bottom_y`. Characters without a glyph are
    /// skipped (they still advance the cursor).
    fn draw_centered_text(&mut self, text: &str, center_x: u32, bottom_y: u32, shade: u8);

    fn width(&self) -> u32;
    fn height(&self) -> u32;
}

/// In-memory 8-bit grayscale raster.
///
/// This is the reference backend: deterministic, directly inspectable in
/// tests, and writable to disk as PGM via [`crate::io::write_pgm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixmapSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixmapSurface {
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            pixels: Vec::new(),
        }
    }

    /// Shade at (x, y). Out-of-bounds reads return the background shade.
    pub fn pixel(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return SHADE_WHITE;
        }
        self.pixels[(y * self.width + x) as usize]
    }

    /// Raw row-major pixel data (for file export).
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    fn set_pixel(&mut self, x: u32, y: u32, shade: u8) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = shade;
        }
    }
}

impl Default for PixmapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for PixmapSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![SHADE_WHITE; (width as usize) * (height as usize)];
    }

    fn clear(&mut self, shade: u8) {
        self.pixels.fill(shade);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, shade: u8) {
        let x1 = x.saturating_add(width).min(self.width);
        let y1 = y.saturating_add(height).min(self.height);
        for yy in y.min(self.height)..y1 {
            for xx in x.min(self.width)..x1 {
                self.pixels[(yy * self.width + xx) as usize] = shade;
            }
        }
    }

    fn draw_centered_text(&mut self, text: &str, center_x: u32, bottom_y: u32, shade: u8) {
        let n = text.chars().count() as u32;
        if n == 0 {
            return;
        }

        let advance = (font::GLYPH_WIDTH + font::TRACKING) * font::SCALE;
        let text_width = n * advance - font::TRACKING * font::SCALE;
        let glyph_height = font::GLYPH_HEIGHT * font::SCALE;

        let mut x0 = center_x.saturating_sub(text_width / 2);
        let y0 = bottom_y.saturating_sub(glyph_height);

        for ch in text.chars() {
            if let Some(rows) = font::glyph(ch) {
                for (row, bits) in rows.iter().enumerate() {
                    for col in 0..font::GLYPH_WIDTH {
                        if bits & (1 << (font::GLYPH_WIDTH - 1 - col)) == 0 {
                            continue;
                        }
                        // Each font pixel becomes a SCALE x SCALE block.
                        for dy in 0..font::SCALE {
                            for dx in 0..font::SCALE {
                                self.set_pixel(
                                    x0 + col * font::SCALE + dx,
                                    y0 + row as u32 * font::SCALE + dy,
                                    shade,
                                );
                            }
                        }
                    }
                }
            }
            x0 += advance;
        }
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}
