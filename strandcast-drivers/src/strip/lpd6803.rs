//! LPD6803 strip driver
//!
//! Wire format per lane:
//! - Start frame: 4 zero bytes
//! - One 16-bit big-endian word per LED: MSB set, then 5 bits each of
//!   red, green, blue
//! - Trailer: one zero bit per LED, rounded up to whole bytes, clocking
//!   the shifted data through the chain
//!
//! The chip has no brightness field, so the scale is multiplied into the
//! color channels before they are quantized to 5 bits.

use alloc::vec::Vec;

use smart_leds::RGB8;
use strandcast_core::traits::{Lane, LedStrip};

/// One LPD6803 chain bound to a bus lane
pub struct Lpd6803Strip {
    lane: Lane,
    pixels: Vec<RGB8>,
    /// Multiplicative brightness in `[0.0, 1.0]`, applied at encode time
    scale: f32,
    frame: Vec<u8>,
}

impl Lpd6803Strip {
    /// Create a strip with `pixel_count` addressable positions on `lane`
    pub fn new(lane: Lane, pixel_count: u32) -> Self {
        let count = pixel_count as usize;
        Self {
            lane,
            pixels: alloc::vec![RGB8::default(); count],
            scale: 1.0,
            frame: Vec::with_capacity(Self::frame_len(count)),
        }
    }

    /// Encoded lane payload size for a given pixel count
    pub fn frame_len(pixel_count: usize) -> usize {
        4 + pixel_count * 2 + pixel_count.div_ceil(8)
    }

    fn channel5(&self, value: u8) -> u16 {
        u16::from((f32::from(value) * self.scale) as u8 >> 3)
    }
}

impl LedStrip for Lpd6803Strip {
    fn lane(&self) -> Lane {
        self.lane
    }

    fn pixel_count(&self) -> u32 {
        self.pixels.len() as u32
    }

    fn set_pixel8(&mut self, pixel: u32, r: u8, g: u8, b: u8) {
        if let Some(slot) = self.pixels.get_mut(pixel as usize) {
            *slot = RGB8::new(r, g, b);
        }
    }

    fn set_brightness_scale(&mut self, scale: f32) {
        self.scale = scale.clamp(0.0, 1.0);
    }

    fn lane_frame(&mut self) -> &[u8] {
        self.frame.clear();
        self.frame.extend_from_slice(&[0x00; 4]);

        for px in &self.pixels {
            let word = 0x8000
                | (self.channel5(px.r) << 10)
                | (self.channel5(px.g) << 5)
                | self.channel5(px.b);
            self.frame.extend_from_slice(&word.to_be_bytes());
        }

        for _ in 0..self.pixels.len().div_ceil(8) {
            self.frame.push(0x00);
        }

        &self.frame
    }
}
