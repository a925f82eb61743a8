use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8::Processor;

pub struct KeyboardDriver {
    events: sdl2::EventPump,
}

/// Conventional layout: the 4x4 block under 1234 stands in for the hex pad.
fn key_index(key: Keycode) -> Option<u8> {
    match key {
        Keycode::Num1 => Some(0x1),
        Keycode::Num2 => Some(0x2),
        Keycode::Num3 => Some(0x3),
        Keycode::Num4 => Some(0xC),
        Keycode::Q => Some(0x4),
        Keycode::W => Some(0x5),
        Keycode::E => Some(0x6),
        Keycode::R => Some(0xD),
        Keycode::A => Some(0x7),
        Keycode::S => Some(0x8),
        Keycode::D => Some(0x9),
        Keycode::F => Some(0xE),
        Keycode::Z => Some(0xA),
        Keycode::X => Some(0x0),
        Keycode::C => Some(0xB),
        Keycode::V => Some(0xF),
        _ => None,
    }
}

impl KeyboardDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, &'static str> {
        Ok(KeyboardDriver {
            events: match context.event_pump() {
                Ok(t) => t,
                Err(_) => return Err("Could not obtain event context"),
            },
        })
    }

    /// Forwards pending key events to `processor`. Returns false once the
    /// user asks to quit.
    pub fn poll(&mut self, processor: &mut Processor) -> bool {
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return false,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(i) = key_index(key) {
                        processor.key_down(i);
                    }
                }
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(i) = key_index(key) {
                        processor.key_up(i);
                    }
                }
                _ => continue,
            }
        }
        true
    }
}
