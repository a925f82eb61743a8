use std::fs;

use chip8::consts;

#[derive(Debug)]
pub struct Rom {
    buffer: Vec<u8>,
}

impl Rom {
    pub fn new(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let buffer = fs::read(path)?;
        if buffer.len() > consts::MAX_ROM_BYTES {
            return Err(format!(
                "ROM is {} bytes, at most {} fit in memory",
                buffer.len(),
                consts::MAX_ROM_BYTES
            )
            .into());
        }
        Ok(Rom { buffer })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }
}
