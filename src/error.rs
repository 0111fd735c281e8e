use std::fmt;

/// Everything that can go wrong while loading a ROM or running a cycle.
///
/// Load failures are fatal to that load attempt only; cycle failures are
/// reported to the driver and leave the machine state untouched apart from
/// the already-advanced program counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Chip8Error {
    /// The ROM image was zero bytes long.
    EmptyRom,
    /// The ROM image doesn't fit between the program origin and the end of memory.
    RomTooLarge(usize),
    /// A fetch or indexed memory access fell outside the 4096-byte space.
    AddressOutOfRange(u16),
    /// The fetched word doesn't decode to any known instruction.
    IllegalInstruction(u16),
    /// A subroutine call exceeded the maximum nesting depth.
    StackOverflow,
    /// A return was executed with no saved return address.
    StackUnderflow,
}

impl std::error::Error for Chip8Error {}

impl fmt::Display for Chip8Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Chip8Error::EmptyRom => write!(f, "ROM image is empty"),
            Chip8Error::RomTooLarge(size) => {
                write!(f, "ROM image of {} bytes is too large to load", size)
            }
            Chip8Error::AddressOutOfRange(addr) => {
                write!(f, "address {:#05X} is outside addressable memory", addr)
            }
            Chip8Error::IllegalInstruction(op) => {
                write!(f, "opcode {:#06X} is not a known instruction", op)
            }
            Chip8Error::StackOverflow => write!(f, "call stack overflow"),
            Chip8Error::StackUnderflow => write!(f, "call stack underflow"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
