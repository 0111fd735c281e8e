/// # Timers
/// The delay and sound countdown timers.
///
/// Both are 8-bit saturating counters decremented once per external tick,
/// conventionally at 60Hz; the driver owns that clock. The sound timer is
/// "active" (tone on) whenever it is nonzero.
pub struct Timers {
    delay: u8,
    sound: u8,
}

impl Timers {
    pub fn new() -> Self {
        Timers { delay: 0, sound: 0 }
    }

    /// Decrement each nonzero counter by one; counters at zero stay there.
    pub fn tick(&mut self) {
        self.delay = self.delay.saturating_sub(1);
        self.sound = self.sound.saturating_sub(1);
    }

    pub fn delay(&self) -> u8 {
        self.delay
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound = value;
    }

    pub fn sound_active(&self) -> bool {
        self.sound > 0
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_counts_down_to_zero_and_saturates() {
        let mut timers = Timers::new();
        timers.set_delay(3);
        for expected in [2, 1, 0] {
            timers.tick();
            assert_eq!(timers.delay(), expected);
        }
        timers.tick();
        assert_eq!(timers.delay(), 0);
    }

    #[test]
    fn test_timers_tick_independently() {
        let mut timers = Timers::new();
        timers.set_delay(2);
        timers.set_sound(1);
        timers.tick();
        assert_eq!(timers.delay(), 1);
        assert!(!timers.sound_active());
    }

    #[test]
    fn test_sound_is_active_while_nonzero() {
        let mut timers = Timers::new();
        assert!(!timers.sound_active());
        timers.set_sound(2);
        assert!(timers.sound_active());
        timers.tick();
        assert!(timers.sound_active());
        timers.tick();
        assert!(!timers.sound_active());
    }
}
