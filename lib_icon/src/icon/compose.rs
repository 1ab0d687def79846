use log::debug;

use crate::constants::{ICON_HEIGHT, ICON_WIDTH};
use crate::raster::{
    draw_glyph, fill_rounded_rectangle, fill_triangle_band, recolor_span, set_points,
    stroke_top_highlight, Pen, PixelGrid, RoundedRect, TriangleBand, GLYPH_A, GLYPH_I,
};

const BUBBLE: RoundedRect = RoundedRect {
    x1: 3,
    y1: 2,
    x2: 42,
    y2: 33,
    radius: 6,
};

const TAIL_TIP: [(i32, i32); 2] = [(3, 41), (4, 41)];

const SPARKLE: [(i32, i32); 5] = [(38, 6), (38, 5), (39, 6), (38, 7), (37, 6)];

const TAIL: TriangleBand = TriangleBand {
    rows: 34..42,
    start_x: 8,
    end_x: 14,
    min_x: 2,
};

/// Paints the speech bubble with "AI" lettering.
///
/// Layers are applied back to front, so later steps deliberately overwrite
/// pixels of earlier ones.
pub fn build_icon_grid() -> PixelGrid {
    let mut grid = PixelGrid::new(ICON_WIDTH, ICON_HEIGHT, Pen::Grey);

    fill_rounded_rectangle(&mut grid, BUBBLE, Pen::Blue, Pen::Black);

    fill_triangle_band(&mut grid, &TAIL, Pen::Blue, Pen::Black);
    set_points(&mut grid, &TAIL_TIP, Pen::Black);

    stroke_top_highlight(&mut grid, 4..8, 6..40, Pen::Blue, Pen::White);
    recolor_span(&mut grid, 4, 6..38, Pen::Blue, Pen::White);

    draw_glyph(&mut grid, &GLYPH_A, 10, 11, Pen::White);
    draw_glyph(&mut grid, &GLYPH_I, 26, 11, Pen::White);

    set_points(&mut grid, &SPARKLE, Pen::White);

    debug!(
        "Icon grid built: {}x{}, {} fill / {} outline / {} highlight pixels",
        grid.width(),
        grid.height(),
        grid.count(Pen::Blue),
        grid.count(Pen::Black),
        grid.count(Pen::White)
    );
    grid
}

/// Pressed look: fill and highlight trade places.
pub fn derive_selected_variant(grid: &PixelGrid) -> PixelGrid {
    grid.map(|pen| pen.swapped(Pen::Blue, Pen::White))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_dimensions() {
        let grid = build_icon_grid();
        assert_eq!(grid.dimensions(), (ICON_WIDTH, ICON_HEIGHT));
        assert_eq!(grid.width() % 16, 0);
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(build_icon_grid(), build_icon_grid());
    }

    #[test]
    fn test_layers() {
        let grid = build_icon_grid();
        // outside the bubble
        assert_eq!(grid.get(0, 0), Some(Pen::Grey));
        assert_eq!(grid.get(47, 43), Some(Pen::Grey));
        // bubble top outline and body
        assert_eq!(grid.get(20, 2), Some(Pen::Black));
        assert_eq!(grid.get(20, 20), Some(Pen::Blue));
        // tail tip
        assert_eq!(grid.get(3, 41), Some(Pen::Black));
        assert_eq!(grid.get(4, 41), Some(Pen::Black));
        // row 4 highlight runs unbroken from the left outline
        assert_eq!(grid.get(5, 4), Some(Pen::Black));
        assert!((6..38).all(|x| grid.get(x, 4) == Some(Pen::White)));
        assert_eq!(grid.get(38, 4), Some(Pen::Blue));
        assert_eq!(grid.get(40, 4), Some(Pen::Black));
        // "A" apex and "I" top bar
        assert_eq!(grid.get(12, 11), Some(Pen::White));
        assert_eq!(grid.get(10, 11), Some(Pen::Blue));
        assert_eq!(grid.get(26, 11), Some(Pen::White));
        // sparkle centre
        assert_eq!(grid.get(38, 6), Some(Pen::White));
    }

    #[test]
    fn test_selected_variant_swaps_fill_and_highlight() {
        let grid = build_icon_grid();
        let selected = derive_selected_variant(&grid);

        assert_eq!(selected.count(Pen::White), grid.count(Pen::Blue));
        assert_eq!(selected.count(Pen::Blue), grid.count(Pen::White));
        assert_eq!(selected.count(Pen::Black), grid.count(Pen::Black));
        assert_eq!(selected.count(Pen::Grey), grid.count(Pen::Grey));
        assert_eq!(selected.get(20, 20), Some(Pen::White));
        assert_eq!(selected.get(38, 6), Some(Pen::Blue));
    }

    #[test]
    fn test_selected_variant_is_involution() {
        let grid = build_icon_grid();
        assert_eq!(derive_selected_variant(&derive_selected_variant(&grid)), grid);
    }
}
