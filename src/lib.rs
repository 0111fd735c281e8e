pub use chip8::{Chip8, Keypad};
pub use display::FrameBuffer;
pub use error::{Chip8Error, Result};
pub use instruction::Instruction;

mod chip8;
pub mod constants;
mod display;
mod error;
mod instruction;
mod memory;
mod rng;
mod stack;
mod timers;
