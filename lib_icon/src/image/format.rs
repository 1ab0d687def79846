use serde::{Serialize, Serializer};

use super::bitplane::BitplaneSet;

pub const MAGIC: u16 = 0xE310;
pub const VERSION: u16 = 1;

// Gadget flags: render from GadgetRender, highlight from SelectRender
pub const GADGHIMAGE: u16 = 0x0002;
pub const GADGIMAGE: u16 = 0x0004;
pub const RELVERIFY: u16 = 0x0001;
pub const BOOLGADGET: u16 = 0x0001;

pub const WBTOOL: u8 = 1;

/// Placeholder written where the in-memory layout holds a pointer.
///
/// The loader rebuilds the real pointers from the record layout, so these
/// only say whether something is there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Null,
    /// The referenced record follows inline.
    Follows,
    /// `NO_ICON_POSITION`: let the desktop place the icon.
    NoPosition,
}

impl Sentinel {
    pub fn value(self) -> u32 {
        match self {
            Sentinel::Null => 0x0000_0000,
            Sentinel::Follows => 0x0000_0001,
            Sentinel::NoPosition => 0x8000_0000,
        }
    }
}

impl Serialize for Sentinel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}

#[derive(Debug, Serialize)]
pub struct FileHeader {
    pub magic: u16,
    pub version: u16,
}

impl FileHeader {
    pub const SIZE: usize = 4;
}

impl Default for FileHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: VERSION,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Gadget {
    pub next_gadget: Sentinel,
    pub left_edge: i16,
    pub top_edge: i16,
    pub width: i16,
    pub height: i16,
    pub flags: u16,
    pub activation: u16,
    pub gadget_type: u16,
    pub gadget_render: Sentinel,
    pub select_render: Sentinel,
    pub gadget_text: Sentinel,
    pub mutual_exclude: Sentinel,
    pub special_info: Sentinel,
    pub gadget_id: u16,
    pub user_data: u32,
}

impl Gadget {
    pub const SIZE: usize = 44;

    /// Boolean gadget showing the first image normally and the second when selected.
    pub fn two_image(width: i16, height: i16) -> Self {
        Self {
            next_gadget: Sentinel::Null,
            left_edge: 0,
            top_edge: 0,
            width,
            height,
            flags: GADGIMAGE | GADGHIMAGE,
            activation: RELVERIFY,
            gadget_type: BOOLGADGET,
            gadget_render: Sentinel::Follows,
            select_render: Sentinel::Follows,
            gadget_text: Sentinel::Null,
            mutual_exclude: Sentinel::Null,
            special_info: Sentinel::Null,
            gadget_id: 0,
            user_data: 0,
        }
    }
}

/// The part of the disk object that follows the embedded gadget.
#[derive(Debug, Serialize)]
pub struct ToolRecord {
    pub object_type: u8,
    pub padding: u8,
    pub default_tool: Sentinel,
    pub tool_types: Sentinel,
    pub current_x: Sentinel,
    pub current_y: Sentinel,
    pub drawer_data: Sentinel,
    pub tool_window: Sentinel,
    pub stack_size: u32,
}

impl ToolRecord {
    pub const SIZE: usize = 30;

    pub fn new(stack_size: u32) -> Self {
        Self {
            object_type: WBTOOL,
            padding: 0,
            default_tool: Sentinel::Null,
            tool_types: Sentinel::Null,
            current_x: Sentinel::NoPosition,
            current_y: Sentinel::NoPosition,
            drawer_data: Sentinel::Null,
            tool_window: Sentinel::Null,
            stack_size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ImageDescriptor {
    pub left_edge: i16,
    pub top_edge: i16,
    pub width: i16,
    pub height: i16,
    pub depth: i16,
    pub image_data: Sentinel,
    pub plane_pick: u8,
    pub plane_on_off: u8,
    pub next_image: Sentinel,
}

impl ImageDescriptor {
    pub const SIZE: usize = 20;

    /// Descriptor whose plane data is written right after it.
    pub fn inline(width: i16, height: i16, depth: u8) -> Self {
        Self {
            left_edge: 0,
            top_edge: 0,
            width,
            height,
            depth: depth.into(),
            image_data: Sentinel::Null,
            plane_pick: plane_mask(depth),
            plane_on_off: 0x00,
            next_image: Sentinel::Null,
        }
    }
}

/// One bit per plane present, `0x03` for two planes.
pub fn plane_mask(depth: u8) -> u8 {
    if depth >= 8 {
        u8::MAX
    } else {
        (1u8 << depth) - 1
    }
}

/// Size of a two-image icon file in bytes.
pub fn expected_file_size(width: usize, height: usize, depth: u8) -> u64 {
    let payload = BitplaneSet::plane_size(width, height) * depth as usize;
    let header = FileHeader::SIZE + Gadget::SIZE + ToolRecord::SIZE;
    (header + 2 * (ImageDescriptor::SIZE + payload)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_values() {
        assert_eq!(Sentinel::Null.value(), 0);
        assert_eq!(Sentinel::Follows.value(), 1);
        assert_eq!(Sentinel::NoPosition.value(), 0x8000_0000);
    }

    #[test]
    fn test_plane_mask() {
        assert_eq!(plane_mask(1), 0x01);
        assert_eq!(plane_mask(2), 0x03);
        assert_eq!(plane_mask(8), 0xFF);
        assert_eq!(plane_mask(16), 0xFF);
    }

    #[test]
    fn test_expected_file_size() {
        assert_eq!(expected_file_size(48, 44, 2), 78 + 2 * (20 + 44 * 3 * 2 * 2));
        assert_eq!(expected_file_size(48, 44, 2), 1174);
    }
}
