use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use bincode::Options;
use log::{debug, error, info};
use serde::Serialize;
use thiserror::Error;

use super::bitplane::{encode_bitplanes, BitplaneSet};
use super::format::{FileHeader, Gadget, ImageDescriptor, ToolRecord};
use crate::constants::ICON_DEPTH;
use crate::raster::PixelGrid;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize icon record: {0}")]
    Serialization(#[from] bincode::Error),
    #[error("Normal image is {normal:?} but selected image is {selected:?}")]
    MismatchedVariants {
        normal: (usize, usize),
        selected: (usize, usize),
    },
    #[error("Icon dimensions {width}x{height} do not fit the 16-bit size fields")]
    DimensionsTooLarge { width: usize, height: usize },
}

/// Big-endian, fixed-width integers, no length prefixes.
fn wire_options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_big_endian()
        .with_fixint_encoding()
}

/// Streams records to `inner` and keeps count of the bytes written.
struct RecordWriter<W: Write> {
    inner: W,
    written: u64,
}

impl<W: Write> RecordWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    fn record<T: Serialize>(&mut self, name: &str, value: &T) -> Result<(), EncodeError> {
        let size = wire_options().serialized_size(value)?;
        wire_options()
            .serialize_into(&mut self.inner, value)
            .map_err(|e| match *e {
                bincode::ErrorKind::Io(io) => EncodeError::Io(io),
                other => EncodeError::Serialization(Box::new(other)),
            })?;
        debug!("{} written at offset {} ({} bytes)", name, self.written, size);
        self.written += size;
        Ok(())
    }

    fn payload(&mut self, name: &str, bytes: &[u8]) -> Result<(), EncodeError> {
        self.inner.write_all(bytes)?;
        debug!(
            "{} written at offset {} ({} bytes)",
            name,
            self.written,
            bytes.len()
        );
        self.written += bytes.len() as u64;
        Ok(())
    }
}

fn checked_dimensions(
    normal: &PixelGrid,
    selected: &PixelGrid,
) -> Result<(i16, i16), EncodeError> {
    if normal.dimensions() != selected.dimensions() {
        error!(
            "Image variants differ in size: {:?} vs {:?}",
            normal.dimensions(),
            selected.dimensions()
        );
        return Err(EncodeError::MismatchedVariants {
            normal: normal.dimensions(),
            selected: selected.dimensions(),
        });
    }

    let (width, height) = normal.dimensions();
    match (i16::try_from(width), i16::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => {
            error!("Icon size {}x{} exceeds the container limits", width, height);
            Err(EncodeError::DimensionsTooLarge { width, height })
        }
    }
}

/// Writes a complete two-image icon to `writer`.
///
/// Records go out in file order and nothing is patched afterwards. Returns the
/// number of bytes written.
pub fn write_icon<W: Write>(
    writer: W,
    normal: &PixelGrid,
    selected: &PixelGrid,
    stack_size: u32,
) -> Result<u64, EncodeError> {
    info!("Starting icon encoding");

    let (width, height) = checked_dimensions(normal, selected)?;

    // Both grids are fully planarised before the first byte goes out
    let normal_planes = encode_bitplanes(normal, ICON_DEPTH);
    let selected_planes = encode_bitplanes(selected, ICON_DEPTH);
    debug!(
        "Bitplanes encoded: {} planes, {} bytes per image",
        ICON_DEPTH,
        normal_planes.len()
    );

    let mut out = RecordWriter::new(writer);

    // Step 1: Disk object header with its embedded gadget
    out.record("File header", &FileHeader::default())?;
    out.record("Gadget", &Gadget::two_image(width, height))?;

    // Step 2: Tool metadata
    out.record("Tool record", &ToolRecord::new(stack_size))?;

    // Step 3: Images, each followed directly by its planes
    write_image(&mut out, "Normal image", width, height, &normal_planes)?;
    write_image(&mut out, "Selected image", width, height, &selected_planes)?;

    out.inner.flush()?;
    info!("Icon encoding completed: {} bytes", out.written);
    Ok(out.written)
}

fn write_image<W: Write>(
    out: &mut RecordWriter<W>,
    name: &str,
    width: i16,
    height: i16,
    planes: &BitplaneSet,
) -> Result<(), EncodeError> {
    out.record(name, &ImageDescriptor::inline(width, height, planes.depth()))?;
    out.payload("Bitplane data", planes.as_bytes())
}

pub fn encode_icon(
    normal: &PixelGrid,
    selected: &PixelGrid,
    stack_size: u32,
) -> Result<Vec<u8>, EncodeError> {
    let mut encoded_data = Vec::new();
    write_icon(&mut encoded_data, normal, selected, stack_size)?;
    Ok(encoded_data)
}

/// Writes the icon to `path`, replacing any existing file, and returns its size.
///
/// A failed write leaves a truncated file behind.
pub fn write_icon_file(
    path: impl AsRef<Path>,
    normal: &PixelGrid,
    selected: &PixelGrid,
    stack_size: u32,
) -> Result<u64, EncodeError> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| {
        error!("Can't create {}: {}", path.display(), e);
        e
    })?;
    write_icon(BufWriter::new(file), normal, selected, stack_size).map_err(|e| {
        error!("Writing {} failed: {}", path.display(), e);
        e
    })?;

    let size = fs::metadata(path)?.len();
    info!("Icon saved to {} ({} bytes)", path.display(), size);
    Ok(size)
}
