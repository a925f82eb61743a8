mod external;

use chip8::{consts, Config, CycleStatus, Processor};
use external::input::KeyboardDriver;
use external::output::DisplayDriver;
use external::rom::Rom;
use log::{error, info};
use std::env;
use std::thread;
use std::time::{Duration, Instant};

const USAGE: &str = "Usage: chip8 <rom-path> [cycles-per-frame] [seed]";

fn parse_config(args: &[String]) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = Config::default();
    if let Some(cycles) = args.first() {
        config.cycles_per_frame = cycles.parse()?;
    }
    if let Some(seed) = args.get(1) {
        config.seed = Some(seed.parse()?);
    }
    Ok(config)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        return Err(USAGE.into());
    }
    let config = parse_config(&args[2..])?;
    let prog = Rom::new(&args[1])?;

    let mut chip8 = Processor::with_config(config);
    chip8.load_program(prog.bytes())?;
    info!("loaded {} ({} bytes)", args[1], prog.bytes().len());

    let context = sdl2::init()?;
    let mut display = DisplayDriver::new(&context)?;
    let mut keyboard = KeyboardDriver::new(&context)?;
    let frame = Duration::from_secs(1) / consts::TIMER_HZ;

    while keyboard.poll(&mut chip8) {
        let frame_start = Instant::now();
        let mut redraw = false;

        for _ in 0..config.cycles_per_frame {
            match chip8.step() {
                Ok(CycleStatus::RedrawScreen) => redraw = true,
                Ok(CycleStatus::Waiting) => break,
                Ok(CycleStatus::Continue) => {}
                Err(err) => {
                    error!("halted at {:#06X}: {}", chip8.registers().pc(), err);
                    return Err(err.into());
                }
            }
        }
        chip8.tick_timers();

        if redraw {
            display.draw(chip8.display_snapshot())?;
        }
        if let Some(rest) = frame.checked_sub(frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }
    Ok(())
}
