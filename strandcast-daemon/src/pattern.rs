//! Bring-up test pattern
//!
//! A scrolling color wheel that exercises the full device contract the
//! way a protocol server would: many pixel writes per frame, one flush,
//! distinct phase per strip so lane mixups are visible on hardware.

use strandcast_core::traits::OutputDevice;
use strandcast_core::RGB8;

/// Position on a 256-step red-green-blue color wheel
fn wheel(pos: u8) -> RGB8 {
    match pos {
        0..=84 => RGB8::new(255 - pos * 3, pos * 3, 0),
        85..=169 => {
            let pos = pos - 85;
            RGB8::new(0, 255 - pos * 3, pos * 3)
        }
        _ => {
            let pos = pos - 170;
            RGB8::new(pos * 3, 0, 255 - pos * 3)
        }
    }
}

/// Scrolling wheel pattern state
#[derive(Debug, Default)]
pub struct TestPattern {
    frame: u64,
}

impl TestPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage the next frame's colors onto every strip
    pub fn paint<D: OutputDevice>(&mut self, device: &mut D) {
        for strip in 0..device.strip_count() {
            // offset per strip so neighboring lanes are distinguishable
            let phase = self.frame + u64::from(strip) * 8;
            for pixel in 0..device.pixels_per_strip() {
                let pos = (u64::from(pixel) + phase) as u8;
                device.set_pixel(strip, pixel, wheel(pos));
            }
        }
        self.frame += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_endpoints() {
        assert_eq!(wheel(0), RGB8::new(255, 0, 0));
        assert_eq!(wheel(85), RGB8::new(0, 255, 0));
        assert_eq!(wheel(170), RGB8::new(0, 0, 255));
    }

    #[test]
    fn test_wheel_never_overflows() {
        for pos in 0..=255u8 {
            let _ = wheel(pos);
        }
    }

    #[test]
    fn test_pattern_advances() {
        struct CountingDevice {
            writes: u64,
        }

        impl OutputDevice for CountingDevice {
            type Error = ();

            fn strip_count(&self) -> u8 {
                2
            }

            fn pixels_per_strip(&self) -> u32 {
                3
            }

            fn set_pixel(&mut self, _strip: u8, _pixel: u32, _color: RGB8) {
                self.writes += 1;
            }

            fn flush_frame(&mut self) -> Result<(), ()> {
                Ok(())
            }

            fn handle_pusher_command(&mut self, _buf: &[u8]) {}
        }

        let mut device = CountingDevice { writes: 0 };
        let mut pattern = TestPattern::new();
        pattern.paint(&mut device);
        assert_eq!(device.writes, 6);
        assert_eq!(pattern.frame, 1);
    }
}
