use crate::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};

/// The FrameBuffer is indexed as [y][x]
pub type FrameBuffer = [[bool; DISPLAY_WIDTH]; DISPLAY_HEIGHT];

/// # Display
/// A 64x32 monochrome frame buffer.
///
/// Sprites are XOR composited: drawing a pixel over a lit pixel turns it off,
/// and that erase is reported as a collision. Coordinates wrap modulo the
/// display size, per row vertically and per pixel horizontally.
pub struct Display {
    pixels: FrameBuffer,
}

impl Display {
    pub fn new() -> Self {
        Display {
            pixels: [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.pixels = [[false; DISPLAY_WIDTH]; DISPLAY_HEIGHT];
    }

    pub fn pixels(&self) -> &FrameBuffer {
        &self.pixels
    }

    /// XOR a sprite onto the buffer at (x, y) with wrapping.
    ///
    /// Each sprite byte is one 8-pixel row, most significant bit leftmost.
    /// Returns whether any previously lit pixel was erased.
    pub fn draw_sprite(&mut self, x: u8, y: u8, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (row, &byte) in sprite.iter().enumerate() {
            let py = (y as usize + row) % DISPLAY_HEIGHT;
            for bit in 0..8 {
                let px = (x as usize + bit) % DISPLAY_WIDTH;
                let lit = (byte >> (7 - bit)) & 1 == 1;
                collision |= lit && self.pixels[py][px];
                self.pixels[py][px] ^= lit;
            }
        }
        collision
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
