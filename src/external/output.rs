use chip8::consts;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND: Color = Color::RGB(0, 0, 0);
const FOREGROUND: Color = Color::RGB(0, 255, 0);

pub struct DisplayDriver {
    pub screen: Canvas<Window>,
}

impl DisplayDriver {
    pub fn new(context: &sdl2::Sdl) -> Result<Self, &'static str> {
        let video_subsystem = match context.video() {
            Ok(v) => v,
            Err(_) => return Err("Could not obtain video context"),
        };
        let window = video_subsystem
            .window(
                "CHIP-8 Window",
                consts::DISPL_WIDTH as u32 * consts::SCALE_FACTOR,
                consts::DISPL_HEIGHT as u32 * consts::SCALE_FACTOR,
            )
            .position_centered()
            .build()
            .map_err(|_| "Could not create window")?;
        let mut canvas = window
            .into_canvas()
            .present_vsync()
            .build()
            .map_err(|_| "Could not create canvas")?;

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        canvas.present();

        Ok(DisplayDriver { screen: canvas })
    }

    /// Paints a row-major 0/1 pixel snapshot.
    pub fn draw(&mut self, pixels: &[u8]) -> Result<(), &'static str> {
        for (pos, &cell) in pixels.iter().enumerate() {
            let x = (pos % consts::DISPL_WIDTH) as u32 * consts::SCALE_FACTOR;
            let y = (pos / consts::DISPL_WIDTH) as u32 * consts::SCALE_FACTOR;

            self.screen.set_draw_color(match cell {
                0 => BACKGROUND,
                1 => FOREGROUND,
                _ => return Err("Invalid (non-binary) pixel value"),
            });
            self.screen
                .fill_rect(Rect::new(
                    x as i32,
                    y as i32,
                    consts::SCALE_FACTOR,
                    consts::SCALE_FACTOR,
                ))
                .map_err(|_| "Could not draw pixel")?;
        }
        self.screen.present();
        Ok(())
    }
}
