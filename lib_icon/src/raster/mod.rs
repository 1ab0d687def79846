pub mod glyph;
pub mod grid;
pub mod shapes;

pub use glyph::{Glyph, GLYPH_A, GLYPH_I};
pub use grid::{Pen, PixelGrid};
pub use shapes::{
    draw_glyph, fill_rectangle, fill_rounded_rectangle, fill_triangle_band, recolor_span,
    set_points, stroke_top_highlight, RoundedRect, TriangleBand,
};
