/// Fixed bitmap glyph, eight columns wide.
///
/// Each row is a mask with bit 7 as the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub rows: &'static [u8],
}

impl Glyph {
    pub const WIDTH: usize = 8;

    pub const fn new(rows: &'static [u8]) -> Self {
        Self { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_set(&self, dx: usize, dy: usize) -> bool {
        match self.rows.get(dy) {
            Some(&mask) if dx < Self::WIDTH => mask & (0x80u8 >> dx) != 0,
            _ => false,
        }
    }

    /// Offsets of all set cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height())
            .flat_map(|dy| (0..Self::WIDTH).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| self.is_set(dx, dy))
    }
}

pub const GLYPH_A: Glyph = Glyph::new(&[
    0b0011_1100,
    0b0111_1110,
    0b1110_0111,
    0b1110_0111,
    0b1110_0111,
    0b1111_1111,
    0b1111_1111,
    0b1110_0111,
    0b1110_0111,
    0b1110_0111,
    0b1110_0111,
]);

pub const GLYPH_I: Glyph = Glyph::new(&[
    0b1111_1111,
    0b1111_1111,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b0001_1000,
    0b1111_1111,
    0b1111_1111,
]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_dimensions() {
        assert_eq!(GLYPH_A.height(), 11);
        assert_eq!(GLYPH_I.height(), 11);
    }

    #[test]
    fn test_glyph_a_top_row() {
        let top: Vec<bool> = (0..Glyph::WIDTH).map(|dx| GLYPH_A.is_set(dx, 0)).collect();
        assert_eq!(
            top,
            vec![false, false, true, true, true, true, false, false]
        );
    }

    #[test]
    fn test_glyph_i_stem() {
        assert!(GLYPH_I.is_set(3, 5));
        assert!(GLYPH_I.is_set(4, 5));
        assert!(!GLYPH_I.is_set(2, 5));
        assert!(!GLYPH_I.is_set(5, 5));
        // 2 full bars top and bottom, 7 rows of a 2-wide stem
        assert_eq!(GLYPH_I.cells().count(), 4 * 8 + 7 * 2);
    }

    #[test]
    fn test_outside_mask_is_unset() {
        assert!(!GLYPH_A.is_set(8, 0));
        assert!(!GLYPH_A.is_set(0, 11));
    }
}
