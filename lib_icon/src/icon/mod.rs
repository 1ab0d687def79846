pub mod compose;
pub mod preview;

pub use compose::{build_icon_grid, derive_selected_variant};
pub use preview::render_preview;
