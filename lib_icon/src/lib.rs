pub mod constants;
pub mod icon;
pub mod image;
pub mod options;
pub mod raster;

use log::*;
use std::io::Write;

pub use crate::icon::{build_icon_grid, derive_selected_variant, render_preview};
pub use crate::image::{encode_icon, write_icon, write_icon_file, EncodeError};
pub use crate::options::{IconOptions, OptionsError};
pub use crate::raster::{Pen, PixelGrid};

/// Logs to stderr at `warn`, with `info` for this crate. `RUST_LOG` overrides both.
pub fn init_logging() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter(Some("lib_icon"), LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
