pub const DEFAULT_OUTPUT: &str = "AmigaAI.info";
pub const DEFAULT_STACK_SIZE: u32 = 131_072;

// Width must stay a multiple of 16
pub const ICON_WIDTH: usize = 48;
pub const ICON_HEIGHT: usize = 44;
pub const ICON_DEPTH: u8 = 2;
