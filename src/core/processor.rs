use crate::config::Config;
use crate::consts;
use crate::core::display::DisplayBuffer;
use crate::core::keypad::KeyboardBuffer;
use crate::core::ram::Ram;
use crate::core::registers::{CallStack, RegisterFile};
use crate::core::timers::Timers;
use crate::error::{Chip8Error, Result};
use crate::utils;
use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const OP_CODE_BYTES: u16 = consts::OP_CODE_BYTES as u16;

/// What the host should do after a successful `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStatus {
    /// The display buffer changed.
    RedrawScreen,
    Continue,
    /// Blocked on Fx0A; the same instruction runs again on the next step.
    Waiting,
}

/// The virtual machine: memory, registers, call stack, timers, display and
/// keypad, driven one instruction at a time by `step`.
#[derive(Debug)]
pub struct Processor {
    registers: RegisterFile,
    stack: CallStack,
    timers: Timers,
    ram: Ram,
    display_buffer: DisplayBuffer,
    keyboard_buffer: KeyboardBuffer,
    config: Config,
    rng: StdRng,
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Processor::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Processor {
            registers: RegisterFile::default(),
            stack: CallStack::default(),
            timers: Timers::default(),
            ram: Ram::default(),
            display_buffer: DisplayBuffer::default(),
            keyboard_buffer: KeyboardBuffer::default(),
            rng: seed_rng(&config),
            config,
        }
    }

    /// Returns the machine to its power-on state. Program memory is cleared.
    pub fn reset(&mut self) {
        debug!("resetting processor");
        self.ram.reset();
        self.reset_state();
    }

    fn reset_state(&mut self) {
        self.registers = RegisterFile::default();
        self.stack = CallStack::default();
        self.timers = Timers::default();
        self.display_buffer.clear();
        self.keyboard_buffer.reset();
        self.rng = seed_rng(&self.config);
    }

    /// Resets the machine and copies `program` to 0x200. On failure nothing
    /// is changed.
    pub fn load_program(&mut self, program: &[u8]) -> Result<()> {
        if let Err(err) = self.ram.load_program(program) {
            debug!("rejected program of {} bytes: {}", program.len(), err);
            return Err(err);
        }
        self.reset_state();
        debug!("loaded program of {} bytes", program.len());
        Ok(())
    }

    /// Fetches, decodes and executes one instruction.
    pub fn step(&mut self) -> Result<CycleStatus> {
        let pc = self.registers.pc();
        let result = self.ram.fetch(pc as usize).and_then(|opcode| {
            trace!("{:#06X}: {:04X}", pc, opcode);
            self.execute(opcode)
        });
        if let Err(err) = &result {
            debug!("fault at {:#06X}: {}", pc, err);
        }
        result
    }

    /// Decrements both timers. Call at 60 Hz, independently of `step`.
    pub fn tick_timers(&mut self) {
        self.timers.tick();
    }

    pub fn key_down(&mut self, key: u8) {
        self.keyboard_buffer.key_down(key);
    }

    pub fn key_up(&mut self, key: u8) {
        self.keyboard_buffer.key_up(key);
    }

    /// 64x32 pixels, row-major, each 0 or 1.
    pub fn display_snapshot(&self) -> &[u8] {
        self.display_buffer.snapshot()
    }

    pub fn memory_view(&self) -> &[u8] {
        self.ram.view()
    }

    /// The instruction `step` would execute next.
    pub fn peek_opcode(&self) -> Result<u16> {
        self.ram.fetch(self.registers.pc() as usize)
    }

    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    pub fn stack(&self) -> &CallStack {
        &self.stack
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn keypad(&self) -> &KeyboardBuffer {
        &self.keyboard_buffer
    }

    pub fn display(&self) -> &DisplayBuffer {
        &self.display_buffer
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // Every fallible check in an arm runs before that arm mutates anything,
    // and the PC is only written once the arm has succeeded.
    fn execute(&mut self, opcode: u16) -> Result<CycleStatus> {
        let (op, x, y, n) = utils::nibble_split(opcode);
        let nn = (opcode & 0x00FF) as u8;
        let nnn = opcode & 0x0FFF;
        let vx = self.registers.get(x)?;
        let vy = self.registers.get(y)?;
        let idx = self.registers.index() as usize;

        let pc = self.registers.pc();
        let skipped_pc = pc.wrapping_add(2 * OP_CODE_BYTES);
        let mut next_pc = pc.wrapping_add(OP_CODE_BYTES);
        let mut status = CycleStatus::Continue;

        match (op, x, y, n) {
            // Screen
            (0, 0, 0xE, 0) => {
                self.display_buffer.clear();
                status = CycleStatus::RedrawScreen;
            }
            (0xD, _, _, _) => {
                let sprite = self.ram.slice(idx, n as usize)?;
                let collision = self.display_buffer.draw_sprite(vx, vy, sprite);
                self.registers.set_flag(collision);
                status = CycleStatus::RedrawScreen;
            }

            // Jumps and subroutines
            (0, 0, 0xE, 0xE) => {
                next_pc = self.stack.pop()?;
            }
            (1, _, _, _) => {
                next_pc = nnn;
            }
            (2, _, _, _) => {
                self.stack.push(next_pc)?;
                next_pc = nnn;
            }
            (0xB, _, _, _) => {
                next_pc = nnn + self.registers.get(0)? as u16;
            }

            // Conditional skips
            (3, _, _, _) => {
                if vx == nn {
                    next_pc = skipped_pc;
                }
            }
            (4, _, _, _) => {
                if vx != nn {
                    next_pc = skipped_pc;
                }
            }
            (5, _, _, 0) => {
                if vx == vy {
                    next_pc = skipped_pc;
                }
            }
            (9, _, _, 0) => {
                if vx != vy {
                    next_pc = skipped_pc;
                }
            }
            (0xE, _, 9, 0xE) => {
                if self.keyboard_buffer.is_pressed(vx & 0xF) {
                    next_pc = skipped_pc;
                }
            }
            (0xE, _, 0xA, 1) => {
                if !self.keyboard_buffer.is_pressed(vx & 0xF) {
                    next_pc = skipped_pc;
                }
            }

            // Loads
            (6, _, _, _) => self.registers.set(x, nn)?,
            (8, _, _, 0) => self.registers.set(x, vy)?,
            (0xA, _, _, _) => self.registers.set_index(nnn),
            (0xC, _, _, _) => {
                let rand_val: u8 = self.rng.gen();
                self.registers.set(x, rand_val & nn)?;
            }

            // Arithmetic. Vx is written before VF so the flag wins when x is F.
            (7, _, _, _) => self.registers.set(x, vx.wrapping_add(nn))?,
            (8, _, _, 4) => {
                let (sum, carry) = vx.overflowing_add(vy);
                self.registers.set(x, sum)?;
                self.registers.set_flag(carry);
            }
            (8, _, _, 5) => {
                self.registers.set(x, vx.wrapping_sub(vy))?;
                self.registers.set_flag(vx >= vy);
            }
            (8, _, _, 7) => {
                self.registers.set(x, vy.wrapping_sub(vx))?;
                self.registers.set_flag(vy >= vx);
            }

            // Logic and shifts
            (8, _, _, 1) => self.registers.set(x, vx | vy)?,
            (8, _, _, 2) => self.registers.set(x, vx & vy)?,
            (8, _, _, 3) => self.registers.set(x, vx ^ vy)?,
            (8, _, _, 6) => {
                self.registers.set(x, vx >> 1)?;
                self.registers.set_flag(vx & 0b0000_0001 != 0);
            }
            (8, _, _, 0xE) => {
                self.registers.set(x, vx << 1)?;
                self.registers.set_flag(vx & 0b1000_0000 != 0);
            }

            // Timers
            (0xF, _, 0, 7) => self.registers.set(x, self.timers.delay())?,
            (0xF, _, 1, 5) => self.timers.set_delay(vx),
            (0xF, _, 1, 8) => self.timers.set_sound(vx),

            // Halt until a key is pressed
            (0xF, _, 0, 0xA) => match self.keyboard_buffer.wait_for_key() {
                Some(key) => self.registers.set(x, key)?,
                None => {
                    next_pc = pc;
                    status = CycleStatus::Waiting;
                }
            },

            // Index register
            (0xF, _, 1, 0xE) => {
                let sum = self.registers.index() as u32 + vx as u32;
                self.registers.set_index(sum as u16);
                if self.config.index_overflow_flag {
                    self.registers.set_flag(sum > consts::INDEX_LIMIT as u32);
                }
            }
            (0xF, _, 2, 9) => {
                let glyph = (vx & 0xF) as usize * consts::FONT_GLYPH_BYTES;
                self.registers.set_index((consts::FONT_OFFSET + glyph) as u16);
            }

            // Memory transfers
            (0xF, _, 3, 3) => {
                self.ram.write_slice(idx, &utils::bcd_split(vx))?;
            }
            (0xF, _, 5, 5) => {
                let count = x as usize + 1;
                self.ram
                    .write_slice(idx, &self.registers.as_slice()[..count])?;
            }
            (0xF, _, 6, 5) => {
                let values = self.ram.slice(idx, x as usize + 1)?;
                self.registers.load(values);
            }

            (_, _, _, _) => return Err(Chip8Error::UnknownOpcode(opcode)),
        }

        self.registers.set_pc(next_pc);
        Ok(status)
    }
}

fn seed_rng(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
