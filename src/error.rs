use thiserror::Error;

/// Faults raised while loading or executing a program. Every fault is
/// terminal for the call that produced it; machine state is left as it was
/// before the faulting instruction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Chip8Error {
    #[error("memory access out of bounds at address {address:#06X}")]
    OutOfBounds { address: usize },

    #[error("write to reserved interpreter memory at address {address:#06X}")]
    ReservedWrite { address: usize },

    #[error("invalid register V{0:X}")]
    InvalidRegister(u8),

    #[error("stack overflow: call depth exceeds 16")]
    StackOverflow,

    #[error("stack underflow: return with empty call stack")]
    StackUnderflow,

    #[error("unknown opcode: {0:#06X}")]
    UnknownOpcode(u16),
}

pub type Result<T> = std::result::Result<T, Chip8Error>;
