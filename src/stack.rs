use crate::constants::STACK_DEPTH;
use crate::error::{Chip8Error, Result};

/// # CallStack
/// A fixed-depth stack of subroutine return addresses.
///
/// Overflow and underflow are reported rather than wrapped so a runaway
/// program surfaces as a recoverable cycle failure.
pub struct CallStack {
    frames: [u16; STACK_DEPTH],
    /// Index of the next free slot.
    sp: usize,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack {
            frames: [0; STACK_DEPTH],
            sp: 0,
        }
    }

    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.sp == STACK_DEPTH {
            return Err(Chip8Error::StackOverflow);
        }
        self.frames[self.sp] = addr;
        self.sp += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.sp == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.sp -= 1;
        Ok(self.frames[self.sp])
    }
}

impl Default for CallStack {
    fn default() -> Self {
        Self::new()
    }
}
