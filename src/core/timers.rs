/// Delay and sound counters. Both count down once per `tick` and stop at 0.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timers {
    delay_timer: u8,
    sound_timer: u8,
}

impl Timers {
    pub fn tick(&mut self) {
        self.delay_timer = self.delay_timer.saturating_sub(1);
        self.sound_timer = self.sound_timer.saturating_sub(1);
    }

    pub fn delay(&self) -> u8 {
        self.delay_timer
    }

    pub fn sound(&self) -> u8 {
        self.sound_timer
    }

    pub fn set_delay(&mut self, value: u8) {
        self.delay_timer = value;
    }

    pub fn set_sound(&mut self, value: u8) {
        self.sound_timer = value;
    }

    /// The buzzer sounds while the sound timer is nonzero.
    pub fn is_sound_active(&self) -> bool {
        self.sound_timer > 0
    }
}
