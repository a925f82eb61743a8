use crate::consts;

/// State of the sixteen hex keys, plus the latch behind the wait-for-key
/// instruction.
#[derive(Default, Debug)]
pub struct KeyboardBuffer {
    buffer: [bool; consts::KEYBOARD_SIZE],
    waiting: bool,
    latched: Option<u8>,
}

impl KeyboardBuffer {
    /// `key` must be 0x0..=0xF.
    pub fn key_down(&mut self, key: u8) {
        let slot = &mut self.buffer[key as usize];
        if !*slot && self.waiting && self.latched.is_none() {
            self.latched = Some(key);
        }
        *slot = true;
    }

    pub fn key_up(&mut self, key: u8) {
        self.buffer[key as usize] = false;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.buffer[key as usize]
    }

    /// One poll of a blocking key wait. The first poll arms the wait and
    /// returns `None`; later polls return the first key pressed since then,
    /// ending the wait.
    pub fn wait_for_key(&mut self) -> Option<u8> {
        if !self.waiting {
            self.waiting = true;
            self.latched = None;
            return None;
        }
        let key = self.latched.take()?;
        self.waiting = false;
        Some(key)
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    pub fn reset(&mut self) {
        *self = KeyboardBuffer::default();
    }
}
