use crate::raster::PixelGrid;

const WORD_BITS: usize = 16;

/// Planar pixel data: `depth` planes, each a run of big-endian 16-bit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitplaneSet {
    depth: u8,
    plane_len: usize,
    data: Vec<u8>,
}

impl BitplaneSet {
    pub fn words_per_row(width: usize) -> usize {
        width.div_ceil(WORD_BITS)
    }

    /// Bytes taken by one plane of a `width × height` grid.
    pub fn plane_size(width: usize, height: usize) -> usize {
        Self::words_per_row(width) * height * 2
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn plane(&self, index: u8) -> Option<&[u8]> {
        if index >= self.depth {
            return None;
        }
        let start = index as usize * self.plane_len;
        Some(&self.data[start..start + self.plane_len])
    }

    /// All planes back to back, plane 0 first.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Splits a grid into `depth` bitplanes.
///
/// Plane `p` holds bit `p` of every pen index. The leftmost pixel of a word
/// lands in its most significant bit. A trailing partial word is padded with
/// zero bits.
pub fn encode_bitplanes(grid: &PixelGrid, depth: u8) -> BitplaneSet {
    let (width, height) = grid.dimensions();
    let words_per_row = BitplaneSet::words_per_row(width);
    let plane_len = BitplaneSet::plane_size(width, height);
    let mut data = Vec::with_capacity(plane_len * depth as usize);

    for plane in 0..depth {
        for row in grid.rows() {
            for word_index in 0..words_per_row {
                let mut word = 0u16;
                for bit in 0..WORD_BITS {
                    let Some(pen) = row.get(word_index * WORD_BITS + bit) else {
                        break;
                    };
                    let value = u32::from(pen.index()).checked_shr(plane.into()).unwrap_or(0);
                    if value & 1 == 1 {
                        word |= 1 << (15 - bit);
                    }
                }
                data.extend_from_slice(&word.to_be_bytes());
            }
        }
    }

    BitplaneSet {
        depth,
        plane_len,
        data,
    }
}
