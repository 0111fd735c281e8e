use log::trace;

use crate::constants::{FONT_GLYPH_SIZE, FONT_START, KEY_COUNT, PROGRAM_START, REGISTER_COUNT};
use crate::display::{Display, FrameBuffer};
use crate::error::{Chip8Error, Result};
use crate::instruction::Instruction;
use crate::memory::Memory;
use crate::rng::ByteSource;
use crate::stack::CallStack;
use crate::timers::Timers;

/// A snapshot of the pressed status of the 16 logical keys 0x0..0xF.
pub type Keypad = [bool; KEY_COUNT];

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks the 16 general purpose registers (VF doubling as the flag
/// register), the index register, the program counter, and the owned
/// memory, call stack, display, timers, and random byte source.
///
/// Supplies interfaces for:
/// - loading ROMs
/// - advancing the CPU one fetch/decode/execute cycle against a keypad snapshot
/// - advancing the timers at the driver's tick rate
/// - inspecting the frame buffer and the sound-on signal for presentation
///
/// The driver owns both clocks: it calls `step` at the instruction rate and
/// `tick` at the timer rate (conventionally ~500Hz and 60Hz). Cycle failures
/// are returned as values and leave everything but the already-advanced
/// program counter untouched.
pub struct Chip8 {
    v: [u8; REGISTER_COUNT],
    i: u16,
    pc: u16,
    memory: Memory,
    stack: CallStack,
    display: Display,
    timers: Timers,
    rng: ByteSource,
    /// The keypad snapshot from the previous cycle, for edge detection.
    last_keys: Keypad,
    draw_flag: bool,
}

impl Chip8 {
    pub fn new() -> Self {
        Self::with_rng(ByteSource::from_entropy())
    }

    /// A machine whose random byte sequence is pinned by `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ByteSource::from_seed(seed))
    }

    fn with_rng(rng: ByteSource) -> Self {
        Chip8 {
            v: [0; REGISTER_COUNT],
            i: 0,
            pc: PROGRAM_START,
            memory: Memory::new(),
            stack: CallStack::new(),
            display: Display::new(),
            timers: Timers::new(),
            rng,
            last_keys: [false; KEY_COUNT],
            draw_flag: false,
        }
    }

    /// Load a ROM image and restart execution at the program origin.
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<()> {
        self.memory.load_rom(rom)?;
        self.pc = PROGRAM_START;
        Ok(())
    }

    /// Advance the CPU by a single cycle.
    ///
    /// Fetches the word at the program counter, advances the counter past it,
    /// then executes. The advance happens before dispatch so control-flow
    /// instructions that set the counter are not clobbered afterwards; a word
    /// that decodes to nothing still advances before it is reported.
    pub fn step(&mut self, keys: Keypad) -> Result<()> {
        let op = self.memory.read_word(self.pc)?;
        trace!(
            "{:04X} v{:02X?} i{:04X} pc{:04X}",
            op,
            self.v,
            self.i,
            self.pc
        );
        let instruction = Instruction::decode(op);
        self.pc += 2;
        let result = match instruction {
            Some(instruction) => self.execute(instruction, &keys),
            None => Err(Chip8Error::IllegalInstruction(op)),
        };
        self.last_keys = keys;
        result
    }

    /// Advance the delay and sound timers by one tick.
    pub fn tick(&mut self) {
        self.timers.tick();
    }

    /// Whether the driver should be playing a tone.
    pub fn sound_active(&self) -> bool {
        self.timers.sound_active()
    }

    /// Returns a copy of the frame buffer if the display changed since the
    /// last call, clearing the redraw flag.
    pub fn get_frame(&mut self) -> Option<FrameBuffer> {
        if self.draw_flag {
            self.draw_flag = false;
            Some(*self.display.pixels())
        } else {
            None
        }
    }

    fn execute(&mut self, instruction: Instruction, keys: &Keypad) -> Result<()> {
        match instruction {
            Instruction::Clear => {
                self.display.clear();
                self.draw_flag = true;
            }
            Instruction::Return => self.pc = self.stack.pop()?,
            Instruction::Jump { nnn } => self.pc = nnn,
            Instruction::Call { nnn } => {
                // the counter already points past the call instruction
                self.stack.push(self.pc)?;
                self.pc = nnn;
            }
            Instruction::SkipEq { x, kk } => {
                if self.v[x as usize] == kk {
                    self.pc += 2;
                }
            }
            Instruction::SkipNe { x, kk } => {
                if self.v[x as usize] != kk {
                    self.pc += 2;
                }
            }
            Instruction::SkipEqReg { x, y } => {
                if self.v[x as usize] == self.v[y as usize] {
                    self.pc += 2;
                }
            }
            Instruction::Load { x, kk } => self.v[x as usize] = kk,
            Instruction::Add { x, kk } => {
                self.v[x as usize] = self.v[x as usize].wrapping_add(kk)
            }
            Instruction::Move { x, y } => self.v[x as usize] = self.v[y as usize],
            Instruction::Or { x, y } => self.v[x as usize] |= self.v[y as usize],
            Instruction::And { x, y } => self.v[x as usize] &= self.v[y as usize],
            Instruction::Xor { x, y } => self.v[x as usize] ^= self.v[y as usize],
            Instruction::AddReg { x, y } => {
                let (res, carry) = self.v[x as usize].overflowing_add(self.v[y as usize]);
                self.v[x as usize] = res;
                self.v[0xF] = carry as u8;
            }
            Instruction::Sub { x, y } => {
                let (res, borrow) = self.v[x as usize].overflowing_sub(self.v[y as usize]);
                self.v[x as usize] = res;
                // inverted polarity relative to add: set means no borrow
                self.v[0xF] = !borrow as u8;
            }
            Instruction::ShiftRight { x } => {
                let ejected = self.v[x as usize] & 0x1;
                self.v[x as usize] >>= 1;
                self.v[0xF] = ejected;
            }
            Instruction::SubNeg { x, y } => {
                let (res, borrow) = self.v[y as usize].overflowing_sub(self.v[x as usize]);
                self.v[x as usize] = res;
                self.v[0xF] = !borrow as u8;
            }
            Instruction::ShiftLeft { x } => {
                let ejected = self.v[x as usize] >> 7;
                self.v[x as usize] <<= 1;
                self.v[0xF] = ejected;
            }
            Instruction::SkipNeReg { x, y } => {
                if self.v[x as usize] != self.v[y as usize] {
                    self.pc += 2;
                }
            }
            Instruction::LoadIndex { nnn } => self.i = nnn,
            Instruction::JumpV0 { nnn } => self.pc = nnn + u16::from(self.v[0x0]),
            Instruction::Rand { x, kk } => self.v[x as usize] = self.rng.next_byte() & kk,
            Instruction::Draw { x, y, n } => {
                let sprite = self.memory.read(self.i & 0x0FFF, n as usize)?;
                let collision =
                    self.display
                        .draw_sprite(self.v[x as usize], self.v[y as usize], sprite);
                self.v[0xF] = collision as u8;
                self.draw_flag = true;
            }
            Instruction::SkipKey { x } => {
                if keys[(self.v[x as usize] & 0xF) as usize] {
                    self.pc += 2;
                }
            }
            Instruction::SkipNoKey { x } => {
                if !keys[(self.v[x as usize] & 0xF) as usize] {
                    self.pc += 2;
                }
            }
            Instruction::ReadDelay { x } => self.v[x as usize] = self.timers.delay(),
            Instruction::WaitKey { x } => {
                // satisfied only by a key that went down this cycle; otherwise
                // step the counter back so the instruction re-decodes itself
                match (0..KEY_COUNT).find(|&key| keys[key] && !self.last_keys[key]) {
                    Some(key) => self.v[x as usize] = key as u8,
                    None => self.pc -= 2,
                }
            }
            Instruction::SetDelay { x } => self.timers.set_delay(self.v[x as usize]),
            Instruction::SetSound { x } => self.timers.set_sound(self.v[x as usize]),
            Instruction::AddIndex { x } => {
                self.i = self.i.wrapping_add(u16::from(self.v[x as usize]))
            }
            Instruction::LoadFont { x } => {
                self.i = FONT_START + u16::from(self.v[x as usize] & 0xF) * FONT_GLYPH_SIZE
            }
            Instruction::StoreBcd { x } => {
                let value = self.v[x as usize];
                let bcd = [value / 100, value / 10 % 10, value % 10];
                self.memory.write(self.i & 0x0FFF, &bcd)?;
            }
            Instruction::StoreRegisters { x } => {
                let registers = &self.v[..=x as usize];
                self.memory.write(self.i & 0x0FFF, registers)?;
            }
            Instruction::ReadRegisters { x } => {
                let len = x as usize + 1;
                let bytes = self.memory.read(self.i & 0x0FFF, len)?;
                self.v[..len].copy_from_slice(bytes);
            }
        }
        Ok(())
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
