use crate::consts;
use crate::error::{Chip8Error, Result};

/// V0..VF, the index register and the program counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    v: [u8; consts::REG_COUNT],
    idx_register: u16,
    pc: u16,
}

impl Default for RegisterFile {
    fn default() -> Self {
        RegisterFile {
            v: [0; consts::REG_COUNT],
            idx_register: 0,
            pc: consts::PROG_OFFSET as u16,
        }
    }
}

impl RegisterFile {
    pub fn get(&self, x: u8) -> Result<u8> {
        self.v
            .get(x as usize)
            .copied()
            .ok_or(Chip8Error::InvalidRegister(x))
    }

    pub fn set(&mut self, x: u8, value: u8) -> Result<()> {
        let slot = self
            .v
            .get_mut(x as usize)
            .ok_or(Chip8Error::InvalidRegister(x))?;
        *slot = value;
        Ok(())
    }

    pub fn set_flag(&mut self, on: bool) {
        self.v[consts::FLAG_REG as usize] = on as u8;
    }

    pub fn flag(&self) -> u8 {
        self.v[consts::FLAG_REG as usize]
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.v
    }

    /// Copies `values` into V0 upwards; registers past its end are untouched.
    pub fn load(&mut self, values: &[u8]) {
        let count = values.len().min(consts::REG_COUNT);
        self.v[..count].copy_from_slice(&values[..count]);
    }

    pub fn index(&self) -> u16 {
        self.idx_register
    }

    pub fn set_index(&mut self, value: u16) {
        self.idx_register = value;
    }

    pub fn pc(&self) -> u16 {
        self.pc
    }

    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }
}

/// Return addresses for subroutine calls, at most `STACK_SIZE` deep.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CallStack {
    stack: [u16; consts::STACK_SIZE],
    stack_pointer: usize,
}

impl CallStack {
    pub fn push(&mut self, addr: u16) -> Result<()> {
        if self.stack_pointer == consts::STACK_SIZE {
            return Err(Chip8Error::StackOverflow);
        }
        self.stack[self.stack_pointer] = addr;
        self.stack_pointer += 1;
        Ok(())
    }

    pub fn pop(&mut self) -> Result<u16> {
        if self.stack_pointer == 0 {
            return Err(Chip8Error::StackUnderflow);
        }
        self.stack_pointer -= 1;
        Ok(self.stack[self.stack_pointer])
    }

    pub fn is_full(&self) -> bool {
        self.stack_pointer == consts::STACK_SIZE
    }

    pub fn depth(&self) -> usize {
        self.stack_pointer
    }

    /// Live entries, oldest first.
    pub fn frames(&self) -> &[u16] {
        &self.stack[..self.stack_pointer]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_registers() {
        let regs = RegisterFile::default();
        assert_eq!(regs.pc(), 0x200);
        assert_eq!(regs.index(), 0);
        assert_eq!(regs.as_slice(), &[0; 16]);
    }

    #[test]
    fn test_register_get_set() -> Result<()> {
        let mut regs = RegisterFile::default();
        regs.set(0xA, 42)?;
        assert_eq!(regs.get(0xA)?, 42);
        regs.set_flag(true);
        assert_eq!(regs.get(0xF)?, 1);
        assert_eq!(regs.flag(), 1);
        Ok(())
    }

    #[test]
    fn test_load() {
        let mut regs = RegisterFile::default();
        regs.load(&[1, 2, 3]);
        assert_eq!(regs.as_slice()[..4], [1, 2, 3, 0]);
    }

    #[test]
    fn test_invalid_register() {
        let mut regs = RegisterFile::default();
        assert_eq!(regs.get(16), Err(Chip8Error::InvalidRegister(16)));
        assert_eq!(regs.set(0x20, 1), Err(Chip8Error::InvalidRegister(0x20)));
    }

    #[test]
    fn test_stack_push_pop() -> Result<()> {
        let mut stack = CallStack::default();
        stack.push(0x202)?;
        stack.push(0x304)?;
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.frames(), &[0x202, 0x304]);
        assert_eq!(stack.pop()?, 0x304);
        assert_eq!(stack.pop()?, 0x202);
        assert_eq!(stack.pop(), Err(Chip8Error::StackUnderflow));
        Ok(())
    }

    #[test]
    fn test_stack_overflow() -> Result<()> {
        let mut stack = CallStack::default();
        for i in 0..consts::STACK_SIZE {
            stack.push(i as u16)?;
        }
        assert!(stack.is_full());
        assert_eq!(stack.push(0xFFF), Err(Chip8Error::StackOverflow));
        assert_eq!(stack.depth(), consts::STACK_SIZE);
        assert_eq!(stack.pop()?, 15);
        Ok(())
    }
}
