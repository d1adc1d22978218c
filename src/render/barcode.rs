//! Bar-pattern layout and drawing.

use crate::domain::{Bar, BarPattern, BarcodeStyle};
use crate::error::AppError;
use crate::render::surface::{Surface, SHADE_BLACK, SHADE_WHITE};

/// Lay out one bar per character of `code`.
///
/// Pure: surface size, bar rectangles, and the label are all computed here;
/// nothing is drawn. Each digit `d` yields a bar of height
/// `bar_height - d * digit_step`, so `0` is the tallest bar and `9` the
/// shortest.
///
/// A non-digit character is a caller-visible error, not a malformed bar.
/// The deriver guarantees digit-only codes, so this path is only reachable
/// with hand-supplied code strings.
pub fn layout(code: &str, style: &BarcodeStyle) -> Result<BarPattern, AppError> {
    let len = code.chars().count() as u32;
    let width = style.surface_width(len);
    let height = style.surface_height();

    let mut bars = Vec::with_capacity(len as usize);
    let mut x = style.margin;
    for ch in code.chars() {
        let digit = ch.to_digit(10).ok_or_else(|| {
            AppError::usage(format!("Non-digit character '{ch}' in code '{code}'."))
        })?;
        let bar_height = style.bar_height.saturating_sub(digit * style.digit_step);
        bars.push(Bar {
            x,
            y: style.margin,
            width: style.bar_width,
            height: bar_height,
        });
        x += style.slot_width();
    }

    Ok(BarPattern {
        width,
        height,
        bars,
        label: code.to_string(),
    })
}

/// Draw an already-computed pattern onto a surface.
///
/// The surface is resized and cleared first, so re-drawing with a different
/// pattern leaves no residue from the previous one.
pub fn draw(pattern: &BarPattern, style: &BarcodeStyle, surface: &mut impl Surface) {
    surface.resize(pattern.width, pattern.height);
    surface.clear(SHADE_WHITE);

    for bar in &pattern.bars {
        surface.fill_rect(bar.x, bar.y, bar.width, bar.height, SHADE_BLACK);
    }

    // Label baseline sits half a margin above the bottom edge.
    surface.draw_centered_text(
        &pattern.label,
        pattern.width / 2,
        pattern.height - style.margin / 2,
        SHADE_BLACK,
    );
}

/// Lay out and draw in one call.
pub fn render(code: &str, style: &BarcodeStyle, surface: &mut impl Surface) -> Result<(), AppError> {
    let pattern = layout(code, style)?;
    draw(&pattern, style, surface);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::surface::PixmapSurface;

    #[test]
    fn surface_sizing_for_six_digit_code() {
        let pattern = layout("123456", &BarcodeStyle::default()).unwrap();
        assert_eq!(pattern.width, 6 * 5 + 40);
        assert_eq!(pattern.height, 100);
        assert_eq!(pattern.bars.len(), 6);
        assert_eq!(pattern.label, "123456");
    }

    #[test]
    fn bar_heights_step_down_linearly() {
        let pattern = layout("0123456789", &BarcodeStyle::default()).unwrap();
        for (i, bar) in pattern.bars.iter().enumerate() {
            assert_eq!(bar.height, 80 - 8 * i as u32);
        }
        assert_eq!(pattern.bars[0].height, 80);
        assert_eq!(pattern.bars[9].height, 8);
    }

    #[test]
    fn bars_advance_by_slot_width_from_the_margin() {
        let pattern = layout("000", &BarcodeStyle::default()).unwrap();
        let xs: Vec<u32> = pattern.bars.iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![20, 25, 30]);
        assert!(pattern.bars.iter().all(|b| b.y == 20 && b.width == 3));
    }

    #[test]
    fn empty_code_is_margins_only() {
        let pattern = layout("", &BarcodeStyle::default()).unwrap();
        assert_eq!(pattern.width, 40);
        assert_eq!(pattern.height, 100);
        assert!(pattern.bars.is_empty());
    }

    #[test]
    fn non_digit_characters_are_an_explicit_error() {
        let err = layout("12a456", &BarcodeStyle::default()).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains('a'));
    }

    #[test]
    fn rendered_pixels_match_the_layout() {
        let style = BarcodeStyle::default();
        let mut surface = PixmapSurface::new();
        render("09", &style, &mut surface).unwrap();

        assert_eq!(surface.width(), 50);
        assert_eq!(surface.height(), 100);

        // Background.
        assert_eq!(surface.pixel(0, 0), SHADE_WHITE);
        // First bar ('0'): x 20..23, y 20..100.
        assert_eq!(surface.pixel(20, 20), SHADE_BLACK);
        assert_eq!(surface.pixel(22, 99), SHADE_BLACK);
        // Gap between bars.
        assert_eq!(surface.pixel(23, 20), SHADE_WHITE);
        // Second bar ('9'): x 25..28, y 20..28 only.
        assert_eq!(surface.pixel(25, 20), SHADE_BLACK);
        assert_eq!(surface.pixel(25, 27), SHADE_BLACK);
        assert_eq!(surface.pixel(25, 40), SHADE_WHITE);
    }

    #[test]
    fn label_is_drawn_near_the_bottom_margin() {
        let style = BarcodeStyle::default();
        let mut surface = PixmapSurface::new();
        render("000000", &style, &mut surface).unwrap();

        // Glyphs occupy y in [height - 10 - 14, height - 10).
        let mut found = false;
        for y in 76..90 {
            for x in 0..surface.width() {
                if surface.pixel(x, y) == SHADE_BLACK {
                    found = true;
                }
            }
        }
        assert!(found, "no label pixels in the bottom band");
    }

    #[test]
    fn rerender_leaves_no_residue() {
        let style = BarcodeStyle::default();
        let mut surface = PixmapSurface::new();

        render("123456", &style, &mut surface).unwrap();
        let first_dims = (surface.width(), surface.height());
        render("000000", &style, &mut surface).unwrap();
        assert_eq!((surface.width(), surface.height()), first_dims);

        // A fresh surface rendered with the second code must match exactly.
        let mut fresh = PixmapSurface::new();
        render("000000", &style, &mut fresh).unwrap();
        assert_eq!(surface, fresh);

        // And re-rendering a short-bar code over a tall-bar one clears the
        // previously black region below the short bar.
        render("0", &style, &mut surface).unwrap();
        assert_eq!(surface.pixel(20, 60), SHADE_BLACK);
        render("9", &style, &mut surface).unwrap();
        assert_eq!(surface.pixel(20, 60), SHADE_WHITE);
    }
}
