#![allow(dead_code)]

use std::path::PathBuf;

use lib_icon::{Pen, PixelGrid};

/// 16×1 row: Blue, Black, White, then Grey up to a final Black pixel.
pub fn marker_row() -> PixelGrid {
    let mut grid = PixelGrid::new(16, 1, Pen::Grey);
    grid.set(0, 0, Pen::Blue);
    grid.set(1, 0, Pen::Black);
    grid.set(2, 0, Pen::White);
    grid.set(15, 0, Pen::Black);
    grid
}

/// 16×1 row cycling through all four pens.
pub fn cycling_row() -> PixelGrid {
    let mut grid = PixelGrid::new(16, 1, Pen::Grey);
    for x in 0..16 {
        grid.set(x, 0, Pen::ALL[x as usize % 4]);
    }
    grid
}

/// Small grid that uses every pen on every row.
pub fn striped_grid(width: usize, height: usize) -> PixelGrid {
    let mut grid = PixelGrid::new(width, height, Pen::Grey);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            grid.set(x, y, Pen::ALL[((x + y) % 4) as usize]);
        }
    }
    grid
}

pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("lib_icon_{}_{}.info", name, std::process::id()))
}

pub fn be_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([bytes[offset], bytes[offset + 1]])
}

pub fn be_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
