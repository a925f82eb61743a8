//! A virtual machine for the CHIP-8 instruction set.
//!
//! The host drives a [`Processor`] by calling [`Processor::step`] many times
//! per frame and [`Processor::tick_timers`] at 60 Hz, feeding key events in
//! and reading [`Processor::display_snapshot`] back out for rendering.

pub mod config;
pub mod consts;
pub mod core;
pub mod error;
mod utils;

pub use crate::config::Config;
pub use crate::core::processor::{CycleStatus, Processor};
pub use crate::error::{Chip8Error, Result};
