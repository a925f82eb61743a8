use crate::consts;

/// Behaviour choices that differ between interpreters of this instruction
/// set, plus host pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// When set, Fx1E writes VF=1 if I+Vx leaves the 12-bit address space,
    /// else VF=0. Off by default.
    pub index_overflow_flag: bool,
    /// Seed for the Cxkk random source; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Instructions the host executes per 60 Hz frame.
    pub cycles_per_frame: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            index_overflow_flag: false,
            seed: None,
            cycles_per_frame: consts::DEFAULT_CYCLES_PER_FRAME,
        }
    }
}
