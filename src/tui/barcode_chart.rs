//! Plotters-powered barcode widget for Ratatui.
//!
//! The bars are plain filled rectangles, so Plotters may look like overkill,
//! but drawing through it keeps the widget on the same rendering path as any
//! future PNG/SVG export backend and handles the pixel-to-cell mapping.
//!
//! We render Plotters output into the Ratatui buffer using `plotters-ratatui-backend`.

use plotters::prelude::*;
// Ratatui's `Color` below shadows the Plotters `Color` trait from the prelude,
// which `.filled()` needs in scope; re-import it anonymously.
use plotters::style::Color as _;
use plotters_ratatui_backend::widget_fn;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::domain::BarPattern;

/// A render-only view of one bar pattern.
///
/// The widget is intentionally data-driven: the geometry is computed by
/// `render::layout` outside the render call. This keeps `render()` focused on
/// drawing and makes the layout testable without a terminal.
pub struct BarcodeChart<'a> {
    pub pattern: &'a BarPattern,
}

impl Widget for BarcodeChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // When the available area is too small, Plotters may fail to build a
        // chart. In that case, we render a small hint rather than panicking.
        if area.width < 20 || area.height < 6 {
            buf.set_string(
                area.x,
                area.y,
                "Barcode area too small (resize terminal).",
                Style::default().fg(Color::Yellow),
            );
            return;
        }

        let width = f64::from(self.pattern.width);
        let height = f64::from(self.pattern.height);
        if width <= 0.0 || height <= 0.0 {
            return;
        }

        // `plotters-ratatui-backend` draws Plotters primitives via Ratatui's
        // `Canvas` widget, which ultimately writes to the terminal buffer.
        let widget = widget_fn(move |root| {
            root.fill(&WHITE)?;

            // Chart coordinates are the surface's pixel coordinates, with the
            // y axis flipped (surfaces grow downward, Plotters grows upward).
            let mut chart = ChartBuilder::on(&root)
                .margin(1)
                .build_cartesian_2d(0.0..width, 0.0..height)?;

            chart.draw_series(self.pattern.bars.iter().map(|bar| {
                let x0 = f64::from(bar.x);
                let x1 = f64::from(bar.x + bar.width);
                let y_top = height - f64::from(bar.y);
                let y_bottom = height - f64::from(bar.y + bar.height);
                Rectangle::new([(x0, y_top), (x1, y_bottom)], BLACK.filled())
            }))?;

            Ok(())
        });

        widget.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BarcodeStyle;
    use crate::render::layout;

    #[test]
    fn tiny_area_shows_a_resize_hint() {
        let pattern = layout("123456", &BarcodeStyle::default()).unwrap();
        let area = Rect::new(0, 0, 18, 4);
        let mut buf = Buffer::empty(area);
        BarcodeChart { pattern: &pattern }.render(area, &mut buf);

        let row: String = (0..18u16).map(|x| buf.cell((x, 0)).unwrap().symbol()).collect();
        assert!(row.starts_with("Barcode"));
    }

    #[test]
    fn bars_paint_into_the_buffer() {
        let pattern = layout("000000", &BarcodeStyle::default()).unwrap();
        let area = Rect::new(0, 0, 40, 12);
        let mut buf = Buffer::empty(area);
        BarcodeChart { pattern: &pattern }.render(area, &mut buf);

        assert_ne!(buf, Buffer::empty(area));
    }
}
