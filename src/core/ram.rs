use crate::consts;
use crate::error::{Chip8Error, Result};
use crate::utils;

/// Flat 4K address space. The font table lives in the reserved region below
/// `PROG_OFFSET`, which only `init_fonts` may write.
#[derive(Debug)]
pub struct Ram {
    buffer: [u8; consts::RAM_BYTES],
}

impl Default for Ram {
    fn default() -> Self {
        let mut ram = Ram {
            buffer: [0; consts::RAM_BYTES],
        };
        ram.init_fonts();
        ram
    }
}

impl Ram {
    fn init_fonts(&mut self) {
        let end = consts::FONT_OFFSET + consts::FONT_SET_SIZE;
        self.buffer[consts::FONT_OFFSET..end].copy_from_slice(&consts::FONT_SET);
    }

    /// Zeroes everything and re-seeds the font table.
    pub fn reset(&mut self) {
        self.buffer.fill(0);
        self.init_fonts();
    }

    pub fn read_byte(&self, addr: usize) -> Result<u8> {
        self.buffer
            .get(addr)
            .copied()
            .ok_or(Chip8Error::OutOfBounds { address: addr })
    }

    pub fn write_byte(&mut self, addr: usize, value: u8) -> Result<()> {
        self.check_writable(addr, 1)?;
        self.buffer[addr] = value;
        Ok(())
    }

    /// Read-only view of `len` bytes starting at `addr`.
    pub fn slice(&self, addr: usize, len: usize) -> Result<&[u8]> {
        if !utils::bounds_check(addr, len) {
            return Err(Chip8Error::OutOfBounds {
                address: first_bad_addr(addr),
            });
        }
        Ok(&self.buffer[addr..addr + len])
    }

    /// Copies `bytes` to consecutive addresses from `addr`. Either every byte
    /// is written or none are.
    pub fn write_slice(&mut self, addr: usize, bytes: &[u8]) -> Result<()> {
        self.check_writable(addr, bytes.len())?;
        self.buffer[addr..addr + bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Checks that `len` bytes from `addr` are inside program space.
    pub fn check_writable(&self, addr: usize, len: usize) -> Result<()> {
        if addr < consts::PROG_OFFSET {
            return Err(Chip8Error::ReservedWrite { address: addr });
        }
        if !utils::bounds_check(addr, len) {
            return Err(Chip8Error::OutOfBounds {
                address: first_bad_addr(addr),
            });
        }
        Ok(())
    }

    /// Clears program space and copies `program` to `PROG_OFFSET`. Memory is
    /// untouched if the image does not fit.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if program.len() > consts::MAX_ROM_BYTES {
            return Err(Chip8Error::OutOfBounds {
                address: consts::RAM_BYTES,
            });
        }
        self.buffer[consts::PROG_OFFSET..].fill(0);
        self.write_slice(consts::PROG_OFFSET, program)
    }

    /// Big-endian instruction word at `pc`.
    pub fn fetch(&self, pc: usize) -> Result<u16> {
        if !(consts::PROG_OFFSET..=consts::LAST_FETCH_ADDR).contains(&pc) {
            return Err(Chip8Error::OutOfBounds { address: pc });
        }
        let bytes = &self.buffer[pc..pc + consts::OP_CODE_BYTES];
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn view(&self) -> &[u8] {
        &self.buffer
    }
}

fn first_bad_addr(addr: usize) -> usize {
    addr.max(consts::RAM_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fonts_seeded() {
        let ram = Ram::default();
        // First char in font: 0
        assert_eq!(ram.view()[0..5], [0xF0, 0x90, 0x90, 0x90, 0xF0]);
        // Last char in font: F
        assert_eq!(ram.view()[75..80], [0xF0, 0x80, 0xF0, 0x80, 0x80]);
        assert!(ram.view()[consts::PROG_OFFSET..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_program_exact_fit() -> Result<()> {
        let mut ram = Ram::default();
        let program = vec![0xAB; consts::RAM_BYTES - consts::PROG_OFFSET];
        ram.load_program(&program)?;
        assert_eq!(ram.read_byte(consts::PROG_OFFSET)?, 0xAB);
        assert_eq!(ram.read_byte(consts::RAM_BYTES - 1)?, 0xAB);
        Ok(())
    }

    #[test]
    fn test_load_program_too_large() {
        let mut ram = Ram::default();
        let program = vec![0xAB; consts::RAM_BYTES - consts::PROG_OFFSET + 1];
        assert_eq!(
            ram.load_program(&program),
            Err(Chip8Error::OutOfBounds {
                address: consts::RAM_BYTES
            })
        );
        assert!(ram.view()[consts::PROG_OFFSET..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_load_program_clears_previous() -> Result<()> {
        let mut ram = Ram::default();
        ram.load_program(&[1, 2, 3, 4])?;
        ram.load_program(&[9])?;
        assert_eq!(ram.slice(consts::PROG_OFFSET, 4)?, &[9, 0, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_write_reserved_rejected() {
        let mut ram = Ram::default();
        assert_eq!(
            ram.write_byte(0x10, 0xFF),
            Err(Chip8Error::ReservedWrite { address: 0x10 })
        );
        assert_eq!(ram.view()[0x10], consts::FONT_SET[0x10]);
    }

    #[test]
    fn test_write_out_of_bounds() {
        let mut ram = Ram::default();
        assert_eq!(
            ram.write_byte(consts::RAM_BYTES, 1),
            Err(Chip8Error::OutOfBounds {
                address: consts::RAM_BYTES
            })
        );
        assert_eq!(
            ram.write_slice(consts::RAM_BYTES - 2, &[1, 2, 3]),
            Err(Chip8Error::OutOfBounds {
                address: consts::RAM_BYTES
            })
        );
        assert_eq!(ram.view()[consts::RAM_BYTES - 2..], [0, 0]);
    }

    #[test]
    fn test_read_out_of_bounds() {
        let ram = Ram::default();
        assert!(ram.read_byte(consts::RAM_BYTES - 1).is_ok());
        assert_eq!(
            ram.read_byte(consts::RAM_BYTES),
            Err(Chip8Error::OutOfBounds {
                address: consts::RAM_BYTES
            })
        );
        assert!(ram.slice(consts::RAM_BYTES - 3, 3).is_ok());
        assert!(ram.slice(consts::RAM_BYTES - 3, 4).is_err());
    }

    #[test]
    fn test_fetch_bounds() -> Result<()> {
        let mut ram = Ram::default();
        ram.write_slice(consts::LAST_FETCH_ADDR, &[0x12, 0x34])?;
        assert_eq!(ram.fetch(consts::LAST_FETCH_ADDR)?, 0x1234);
        assert_eq!(
            ram.fetch(consts::RAM_BYTES - 1),
            Err(Chip8Error::OutOfBounds {
                address: consts::RAM_BYTES - 1
            })
        );
        assert_eq!(
            ram.fetch(0x1FE),
            Err(Chip8Error::OutOfBounds { address: 0x1FE })
        );
        Ok(())
    }

    #[test]
    fn test_reset_keeps_fonts() -> Result<()> {
        let mut ram = Ram::default();
        ram.load_program(&[0xFF; 16])?;
        ram.reset();
        assert_eq!(ram.view()[..consts::FONT_SET_SIZE], consts::FONT_SET);
        assert!(ram.view()[consts::PROG_OFFSET..].iter().all(|&b| b == 0));
        Ok(())
    }
}
