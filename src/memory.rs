use crate::constants::{FONT_SET, FONT_START, MAX_ROM_SIZE, MEMORY_SIZE, PROGRAM_START};
use crate::error::{Chip8Error, Result};

/// # Memory
/// The flat 4096-byte addressable space.
///
/// Layout:
/// - `0x000..0x200` is reserved for the interpreter; the only populated part
///   is the font sprite sheet at `0x050..0x0A0`
/// - `0x200..` holds the loaded ROM and its working storage
///
/// Every access is bounds checked and reports `AddressOutOfRange` rather than
/// panicking; callers that dereference the index register mask it to 12 bits
/// before handing the address over.
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_START as usize;
        bytes[font..font + FONT_SET.len()].copy_from_slice(&FONT_SET);
        Memory { bytes }
    }

    /// Copy a ROM verbatim into memory starting at the program origin.
    ///
    /// Bytes past the end of the ROM keep their prior (zero) value.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        if rom.is_empty() {
            return Err(Chip8Error::EmptyRom);
        }
        if rom.len() > MAX_ROM_SIZE {
            return Err(Chip8Error::RomTooLarge(rom.len()));
        }
        let start = PROGRAM_START as usize;
        self.bytes[start..start + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// Fetch a big-endian 16-bit word from two consecutive bytes.
    pub fn read_word(&self, addr: u16) -> Result<u16> {
        let a = addr as usize;
        if a + 1 >= MEMORY_SIZE {
            return Err(Chip8Error::AddressOutOfRange(addr));
        }
        Ok(u16::from(self.bytes[a]) << 8 | u16::from(self.bytes[a + 1]))
    }

    pub fn read(&self, addr: u16, len: usize) -> Result<&[u8]> {
        let a = addr as usize;
        if a + len > MEMORY_SIZE {
            return Err(Chip8Error::AddressOutOfRange(addr));
        }
        Ok(&self.bytes[a..a + len])
    }

    pub fn write(&mut self, addr: u16, data: &[u8]) -> Result<()> {
        let a = addr as usize;
        if a + data.len() > MEMORY_SIZE {
            return Err(Chip8Error::AddressOutOfRange(addr));
        }
        self.bytes[a..a + data.len()].copy_from_slice(data);
        Ok(())
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
