/// One of the four pens of the Workbench 2/3 palette.
///
/// A pen is only an index; the actual colour is chosen by whoever displays
/// the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Pen {
    Grey = 0,
    Black = 1,
    White = 2,
    Blue = 3,
}

impl Pen {
    pub const ALL: [Pen; 4] = [Pen::Grey, Pen::Black, Pen::White, Pen::Blue];

    pub fn index(self) -> u8 {
        self as u8
    }

    /// Exchanges `a` and `b`, leaving every other pen alone.
    pub fn swapped(self, a: Pen, b: Pen) -> Pen {
        if self == a {
            b
        } else if self == b {
            a
        } else {
            self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<Pen>,
}

impl PixelGrid {
    pub fn new(width: usize, height: usize, background: Pen) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Pen> {
        self.offset(x, y).map(|index| self.pixels[index])
    }

    /// Paints one pixel. Returns `false` when the pixel was clipped.
    pub fn set(&mut self, x: i32, y: i32, pen: Pen) -> bool {
        match self.offset(x, y) {
            Some(index) => {
                self.pixels[index] = pen;
                true
            }
            None => false,
        }
    }

    pub fn row(&self, y: usize) -> Option<&[Pen]> {
        if y >= self.height {
            return None;
        }
        Some(&self.pixels[y * self.width..(y + 1) * self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pen]> {
        // chunks() rejects a zero size
        self.pixels.chunks(self.width.max(1))
    }

    /// Builds a new grid of the same size with `f` applied to every pixel.
    pub fn map(&self, f: impl Fn(Pen) -> Pen) -> PixelGrid {
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.iter().map(|&pen| f(pen)).collect(),
        }
    }

    pub fn count(&self, pen: Pen) -> usize {
        self.pixels.iter().filter(|&&p| p == pen).count()
    }
}
