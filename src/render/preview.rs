//! ASCII preview of a bar pattern for terminal output.
//!
//! This is intentionally "dumb" (fixed cell size, no anti-aliasing),
//! optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! One text column is one surface pixel; one text row is four.

use crate::domain::BarPattern;

const CELL_W: u32 = 1;
const CELL_H: u32 = 4;

/// Render the pattern as a character grid with the label centered beneath.
pub fn ascii_preview(pattern: &BarPattern) -> String {
    let cols = (pattern.width / CELL_W).max(1) as usize;
    let rows = (pattern.height / CELL_H).max(1) as usize;

    let mut grid = vec![vec![' '; cols]; rows];
    for bar in &pattern.bars {
        if bar.width == 0 || bar.height == 0 {
            continue;
        }
        let cx0 = (bar.x / CELL_W) as usize;
        let cx1 = ((bar.x + bar.width - 1) / CELL_W) as usize;
        let cy0 = (bar.y / CELL_H) as usize;
        let cy1 = ((bar.y + bar.height - 1) / CELL_H) as usize;
        for row in grid.iter_mut().take(rows.min(cy1 + 1)).skip(cy0.min(rows)) {
            for cell in row.iter_mut().take(cols.min(cx1 + 1)).skip(cx0.min(cols)) {
                *cell = '█';
            }
        }
    }

    let mut out = String::with_capacity((cols + 1) * (rows + 1));
    for row in grid {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if !pattern.label.is_empty() {
        let pad = cols.saturating_sub(pattern.label.chars().count()) / 2;
        out.push_str(&" ".repeat(pad));
        out.push_str(&pattern.label);
        out.push('\n');
    }

    out
}
