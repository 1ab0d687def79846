use crate::raster::{Pen, PixelGrid};

fn pen_char(pen: Pen) -> char {
    match pen {
        Pen::Grey => '.',
        Pen::Black => '#',
        Pen::White => 'O',
        Pen::Blue => '@',
    }
}

/// Text rendering of a grid, one character per pixel and one line per row.
pub fn render_preview(grid: &PixelGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for row in grid.rows() {
        out.extend(row.iter().map(|&pen| pen_char(pen)));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_characters() {
        let mut grid = PixelGrid::new(4, 2, Pen::Grey);
        grid.set(1, 0, Pen::Black);
        grid.set(2, 0, Pen::White);
        grid.set(3, 0, Pen::Blue);
        assert_eq!(render_preview(&grid), ".#O@\n....\n");
    }
}
