use std::ops::Range;

use super::glyph::Glyph;
use super::grid::{Pen, PixelGrid};

/// Clamps an inclusive box to the grid, returning `None` when nothing of it is visible.
fn visible_box(
    grid: &PixelGrid,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
) -> Option<(i32, i32, i32, i32)> {
    let (width, height) = grid.dimensions();
    let max_x = i32::try_from(width).unwrap_or(i32::MAX) - 1;
    let max_y = i32::try_from(height).unwrap_or(i32::MAX) - 1;

    let (x1, x2) = (x1.max(0), x2.min(max_x));
    let (y1, y2) = (y1.max(0), y2.min(max_y));
    if x1 > x2 || y1 > y2 {
        return None;
    }
    Some((x1, y1, x2, y2))
}

pub fn fill_rectangle(grid: &mut PixelGrid, x1: i32, y1: i32, x2: i32, y2: i32, pen: Pen) {
    let Some((x1, y1, x2, y2)) = visible_box(grid, x1, y1, x2, y2) else {
        return;
    };
    for y in y1..=y2 {
        for x in x1..=x2 {
            grid.set(x, y, pen);
        }
    }
}

/// Inclusive box with circular corners of `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedRect {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub radius: i32,
}

impl RoundedRect {
    pub fn is_in_rounded_region(&self, x: i32, y: i32) -> bool {
        self.contains(x.into(), y.into())
    }

    /// A region pixel with at least one 4-neighbour outside the region.
    pub fn is_on_rounded_edge(&self, x: i32, y: i32) -> bool {
        let (x, y) = (i64::from(x), i64::from(y));
        self.contains(x, y)
            && [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)]
                .iter()
                .any(|&(nx, ny)| !self.contains(nx, ny))
    }

    // Widened so that corner centres and squared distances cannot overflow
    fn contains(&self, x: i64, y: i64) -> bool {
        let (x1, y1) = (i64::from(self.x1), i64::from(self.y1));
        let (x2, y2) = (i64::from(self.x2), i64::from(self.y2));
        if !(x1..=x2).contains(&x) || !(y1..=y2).contains(&y) {
            return false;
        }

        let r = i64::from(self.radius);
        let in_band_x = (x1 + r..=x2 - r).contains(&x);
        let in_band_y = (y1 + r..=y2 - r).contains(&y);
        if in_band_x || in_band_y {
            return true;
        }

        // Only the four corner squares are left
        let cx = if x < x1 + r { x1 + r } else { x2 - r };
        let cy = if y < y1 + r { y1 + r } else { y2 - r };
        let (dx, dy, r) = (i128::from(x - cx), i128::from(y - cy), i128::from(r));
        dx * dx + dy * dy <= r * r
    }
}

pub fn fill_rounded_rectangle(grid: &mut PixelGrid, rect: RoundedRect, fill: Pen, outline: Pen) {
    let Some((x1, y1, x2, y2)) = visible_box(grid, rect.x1, rect.y1, rect.x2, rect.y2) else {
        return;
    };
    for y in y1..=y2 {
        for x in x1..=x2 {
            if rect.is_on_rounded_edge(x, y) {
                grid.set(x, y, outline);
            } else if rect.is_in_rounded_region(x, y) {
                grid.set(x, y, fill);
            }
        }
    }
}

/// Triangular band whose span moves one column left per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriangleBand {
    pub rows: Range<i32>,
    pub start_x: i32,
    pub end_x: i32,
    pub min_x: i32,
}

impl TriangleBand {
    /// Inclusive span covered on row `y`.
    pub fn span(&self, y: i32) -> (i32, i32) {
        let dy = y.saturating_sub(self.rows.start);
        (
            self.start_x.saturating_sub(dy).max(self.min_x),
            self.end_x.saturating_sub(dy),
        )
    }
}

pub fn fill_triangle_band(grid: &mut PixelGrid, band: &TriangleBand, fill: Pen, outline: Pen) {
    for y in band.rows.clone() {
        let (start, end) = band.span(y);
        if let Some((x1, _, x2, _)) = visible_box(grid, start, y, end, y) {
            for x in x1..=x2 {
                grid.set(x, y, fill);
            }
        }
        grid.set(start, y, outline);
        if end != start {
            grid.set(end, y, outline);
        }
    }
}

pub fn draw_glyph(grid: &mut PixelGrid, glyph: &Glyph, origin_x: i32, origin_y: i32, pen: Pen) {
    for (dx, dy) in glyph.cells() {
        let x = origin_x.checked_add(dx as i32);
        let y = origin_y.checked_add(dy as i32);
        if let (Some(x), Some(y)) = (x, y) {
            grid.set(x, y, pen);
        }
    }
}

pub fn set_points(grid: &mut PixelGrid, points: &[(i32, i32)], pen: Pen) {
    for &(x, y) in points {
        grid.set(x, y, pen);
    }
}

/// Repaints the first `source` pixel of every row, scanning `columns` left to right.
pub fn stroke_top_highlight(
    grid: &mut PixelGrid,
    rows: Range<i32>,
    columns: Range<i32>,
    source: Pen,
    highlight: Pen,
) {
    for y in rows {
        if let Some(x) = columns.clone().find(|&x| grid.get(x, y) == Some(source)) {
            grid.set(x, y, highlight);
        }
    }
}

/// Repaints every `source` pixel of one row span.
pub fn recolor_span(
    grid: &mut PixelGrid,
    y: i32,
    columns: Range<i32>,
    source: Pen,
    highlight: Pen,
) {
    for x in columns {
        if grid.get(x, y) == Some(source) {
            grid.set(x, y, highlight);
        }
    }
}
