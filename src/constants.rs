/// Size of the addressable memory space in bytes.
pub const MEMORY_SIZE: usize = 4096;

/// Where loaded programs begin and where the program counter starts.
///
/// Everything below this address is reserved for the interpreter itself;
/// the only thing stored there today is the font sprite sheet.
pub const PROGRAM_START: u16 = 0x200;

/// The largest ROM that fits between the program origin and the end of memory.
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - PROGRAM_START as usize;

/// Where the font sprite sheet is preloaded.
pub const FONT_START: u16 = 0x050;

/// Bytes per font glyph (each glyph is 8x5 pixels).
pub const FONT_GLYPH_SIZE: u16 = 5;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Maximum call nesting before a subroutine call reports overflow.
pub const STACK_DEPTH: usize = 16;

pub const REGISTER_COUNT: usize = 16;
pub const KEY_COUNT: usize = 16;

/// Sprites for the hexadecimal digits 0..F
///
/// Each digit is represented by 5 bytes where each bit is one pixel.
/// e.g. 0xF0, 0x90, 0x90, 0x90, 0xF0 is 0:
/// ```text
/// 1111 0000
/// 1001 0000
/// 1001 0000
/// 1001 0000
/// 1111 0000
/// ```
pub const FONT_SET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
