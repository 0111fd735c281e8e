/// # Instructions
///
/// Chip-8 opcodes are 16 bits each. Their behavior is cased on some combination of:
/// - `(n, _, _, _)` broad categorization; applies to all opcodes
/// - `(_, _, _, n)` specific behavior within a category
/// - `(_, _, n, n)` more specific behavior within a category
/// - `(_, n, n, n)` some fixed function that doesn't require variables (e.g. clear screen)
///
/// Nibbles not used to select the operation carry its operands:
/// - `(_, n, n, n)` a 12-bit address
/// - `(_, _, n, n)` a byte that is assigned to and/or compared with Vx
/// - `(_, n, _, _)` the register Vx or a range of registers V0..Vx
/// - `(_, _, n, _)` the register Vy
///
/// Decoding is pure and total: every word maps either to one of these
/// variants or to `None`, which the interpreter reports as an illegal
/// instruction.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `00E0` Clear the screen
    Clear,
    /// `00EE` Return from subroutine
    Return,
    /// `1nnn` Jump to address `nnn`
    Jump { nnn: u16 },
    /// `2nnn` Call subroutine at address `nnn`
    Call { nnn: u16 },
    /// `3xkk` Skip next instruction if Vx == `kk`
    SkipEq { x: u8, kk: u8 },
    /// `4xkk` Skip next instruction if Vx != `kk`
    SkipNe { x: u8, kk: u8 },
    /// `5xy0` Skip next instruction if Vx == Vy
    SkipEqReg { x: u8, y: u8 },
    /// `6xkk` Vx = `kk`
    Load { x: u8, kk: u8 },
    /// `7xkk` Vx += `kk` (no carry flag)
    Add { x: u8, kk: u8 },
    /// `8xy0` Vx = Vy
    Move { x: u8, y: u8 },
    /// `8xy1` Vx |= Vy
    Or { x: u8, y: u8 },
    /// `8xy2` Vx &= Vy
    And { x: u8, y: u8 },
    /// `8xy3` Vx ^= Vy
    Xor { x: u8, y: u8 },
    /// `8xy4` Vx += Vy; VF = carry
    AddReg { x: u8, y: u8 },
    /// `8xy5` Vx -= Vy; VF = no borrow
    Sub { x: u8, y: u8 },
    /// `8xy6` Vx >>= 1; VF = ejected bit
    ShiftRight { x: u8 },
    /// `8xy7` Vx = Vy - Vx; VF = no borrow
    SubNeg { x: u8, y: u8 },
    /// `8xyE` Vx <<= 1; VF = ejected bit
    ShiftLeft { x: u8 },
    /// `9xy0` Skip next instruction if Vx != Vy
    SkipNeReg { x: u8, y: u8 },
    /// `Annn` I = `nnn`
    LoadIndex { nnn: u16 },
    /// `Bnnn` Jump to address `nnn` + V0
    JumpV0 { nnn: u16 },
    /// `Cxkk` Vx = random byte & `kk`
    Rand { x: u8, kk: u8 },
    /// `Dxyn` Draw the `n`-row sprite at I to (Vx, Vy); VF = collision
    Draw { x: u8, y: u8, n: u8 },
    /// `Ex9E` Skip next instruction if the key in Vx is pressed
    SkipKey { x: u8 },
    /// `ExA1` Skip next instruction if the key in Vx is not pressed
    SkipNoKey { x: u8 },
    /// `Fx07` Vx = delay timer
    ReadDelay { x: u8 },
    /// `Fx0A` Wait for a keypress and store it in Vx
    WaitKey { x: u8 },
    /// `Fx15` delay timer = Vx
    SetDelay { x: u8 },
    /// `Fx18` sound timer = Vx
    SetSound { x: u8 },
    /// `Fx1E` I += Vx
    AddIndex { x: u8 },
    /// `Fx29` I = address of the font glyph for Vx
    LoadFont { x: u8 },
    /// `Fx33` Store BCD of Vx at I..I+3
    StoreBcd { x: u8 },
    /// `Fx55` Store V0..=Vx at I onward
    StoreRegisters { x: u8 },
    /// `Fx65` Read V0..=Vx from I onward
    ReadRegisters { x: u8 },
}

impl Instruction {
    /// Decode a fetched word into an instruction, or `None` if the word
    /// matches no known pattern.
    pub fn decode(op: u16) -> Option<Instruction> {
        let nibbles = (
            ((op & 0xF000) >> 12) as u8,
            ((op & 0x0F00) >> 8) as u8,
            ((op & 0x00F0) >> 4) as u8,
            (op & 0x000F) as u8,
        );
        let (_, x, y, n) = nibbles;
        let kk = (op & 0x00FF) as u8;
        let nnn = op & 0x0FFF;

        let instruction = match nibbles {
            (0x0, 0x0, 0xE, 0x0) => Instruction::Clear,
            (0x0, 0x0, 0xE, 0xE) => Instruction::Return,
            (0x1, ..) => Instruction::Jump { nnn },
            (0x2, ..) => Instruction::Call { nnn },
            (0x3, ..) => Instruction::SkipEq { x, kk },
            (0x4, ..) => Instruction::SkipNe { x, kk },
            (0x5, .., 0x0) => Instruction::SkipEqReg { x, y },
            (0x6, ..) => Instruction::Load { x, kk },
            (0x7, ..) => Instruction::Add { x, kk },
            (0x8, .., 0x0) => Instruction::Move { x, y },
            (0x8, .., 0x1) => Instruction::Or { x, y },
            (0x8, .., 0x2) => Instruction::And { x, y },
            (0x8, .., 0x3) => Instruction::Xor { x, y },
            (0x8, .., 0x4) => Instruction::AddReg { x, y },
            (0x8, .., 0x5) => Instruction::Sub { x, y },
            (0x8, .., 0x6) => Instruction::ShiftRight { x },
            (0x8, .., 0x7) => Instruction::SubNeg { x, y },
            (0x8, .., 0xE) => Instruction::ShiftLeft { x },
            (0x9, .., 0x0) => Instruction::SkipNeReg { x, y },
            (0xA, ..) => Instruction::LoadIndex { nnn },
            (0xB, ..) => Instruction::JumpV0 { nnn },
            (0xC, ..) => Instruction::Rand { x, kk },
            (0xD, ..) => Instruction::Draw { x, y, n },
            (0xE, _, 0x9, 0xE) => Instruction::SkipKey { x },
            (0xE, _, 0xA, 0x1) => Instruction::SkipNoKey { x },
            (0xF, _, 0x0, 0x7) => Instruction::ReadDelay { x },
            (0xF, _, 0x0, 0xA) => Instruction::WaitKey { x },
            (0xF, _, 0x1, 0x5) => Instruction::SetDelay { x },
            (0xF, _, 0x1, 0x8) => Instruction::SetSound { x },
            (0xF, _, 0x1, 0xE) => Instruction::AddIndex { x },
            (0xF, _, 0x2, 0x9) => Instruction::LoadFont { x },
            (0xF, _, 0x3, 0x3) => Instruction::StoreBcd { x },
            (0xF, _, 0x5, 0x5) => Instruction::StoreRegisters { x },
            (0xF, _, 0x6, 0x5) => Instruction::ReadRegisters { x },
            _ => return None,
        };
        Some(instruction)
    }
}
