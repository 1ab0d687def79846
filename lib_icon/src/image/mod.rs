pub mod bitplane;
pub mod encoder;
pub mod format;

pub use bitplane::{encode_bitplanes, BitplaneSet};
pub use encoder::{encode_icon, write_icon, write_icon_file, EncodeError};
pub use format::{expected_file_size, Sentinel};
