use crate::consts;

/// 64x32 monochrome frame buffer, row-major, one byte (0 or 1) per pixel.
#[derive(Debug)]
pub struct DisplayBuffer {
    buffer: [u8; consts::DISPL_PIXELS],
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        DisplayBuffer {
            buffer: [0; consts::DISPL_PIXELS],
        }
    }
}

impl DisplayBuffer {
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }

    pub fn pixel(&self, x: usize, y: usize) -> u8 {
        self.buffer[index(x, y)]
    }

    /// XORs an 8-pixel-wide sprite, one byte per row, onto the screen at
    /// `(x mod 64, y mod 32)`. Pixels running off an edge wrap to the other
    /// side. Returns true if any lit pixel was switched off.
    pub fn draw_sprite(&mut self, x: u8, y: u8, rows: &[u8]) -> bool {
        let x_coord = x as usize % consts::DISPL_WIDTH;
        let y_coord = y as usize % consts::DISPL_HEIGHT;
        let mut collision = false;

        for (i, &row) in rows.iter().enumerate() {
            for shift_pos in 0..consts::SPRITE_WIDTH {
                if (row >> (7 - shift_pos)) & 1 == 0 {
                    continue;
                }
                let idx = index(x_coord + shift_pos, y_coord + i);
                if self.buffer[idx] == 1 {
                    collision = true;
                }
                self.buffer[idx] ^= 1;
            }
        }
        collision
    }

    /// All 2048 pixels, row-major.
    pub fn snapshot(&self) -> &[u8] {
        &self.buffer
    }
}

fn index(x: usize, y: usize) -> usize {
    (y % consts::DISPL_HEIGHT) * consts::DISPL_WIDTH + (x % consts::DISPL_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_sets_pixels() {
        let mut display = DisplayBuffer::default();
        let collision = display.draw_sprite(2, 3, &[0b1010_0000]);
        assert!(!collision);
        assert_eq!(display.pixel(2, 3), 1);
        assert_eq!(display.pixel(3, 3), 0);
        assert_eq!(display.pixel(4, 3), 1);
        assert_eq!(display.snapshot().iter().filter(|&&p| p == 1).count(), 2);
    }

    #[test]
    fn test_draw_twice_collides_and_clears() {
        let mut display = DisplayBuffer::default();
        let glyph = &consts::FONT_SET[0..5];
        assert!(!display.draw_sprite(10, 10, glyph));
        assert!(display.draw_sprite(10, 10, glyph));
        assert!(display.snapshot().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_draw_overlap_without_erase_is_not_collision() {
        let mut display = DisplayBuffer::default();
        display.draw_sprite(0, 0, &[0b1000_0000]);
        assert!(!display.draw_sprite(0, 0, &[0b0100_0000]));
        assert_eq!(display.pixel(0, 0), 1);
        assert_eq!(display.pixel(1, 0), 1);
    }

    #[test]
    fn test_draw_wraps_both_axes() {
        let mut display = DisplayBuffer::default();
        display.draw_sprite(62, 31, &[0xF0, 0xF0]);
        assert_eq!(display.pixel(62, 31), 1);
        assert_eq!(display.pixel(63, 31), 1);
        assert_eq!(display.pixel(0, 31), 1);
        assert_eq!(display.pixel(1, 31), 1);
        assert_eq!(display.pixel(62, 0), 1);
        assert_eq!(display.pixel(1, 0), 1);
        assert_eq!(display.pixel(2, 0), 0);
    }

    #[test]
    fn test_draw_start_coordinates_wrap() {
        let mut display = DisplayBuffer::default();
        display.draw_sprite(70, 33, &[0x80]);
        assert_eq!(display.pixel(6, 1), 1);
    }

    #[test]
    fn test_clear() {
        let mut display = DisplayBuffer::default();
        display.draw_sprite(0, 0, &[0xFF; 15]);
        display.clear();
        assert_eq!(display.snapshot().len(), consts::DISPL_PIXELS);
        assert!(display.snapshot().iter().all(|&p| p == 0));
    }
}
