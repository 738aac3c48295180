//! APA102 strip driver
//!
//! Wire format per lane:
//! - Start frame: 4 zero bytes
//! - One 4-byte frame per LED: `0b111xxxxx` header carrying the 5-bit
//!   brightness field, then blue, green, red
//! - Trailer: one zero byte per 16 LEDs (plus one), providing the extra
//!   clock edges LEDs late in the chain need to latch
//!
//! The chip's global brightness field has 5 bits; the 16-bit protocol
//! scale is quantized down to it, so the low bits of the wire value have
//! no visible effect on this family.

use alloc::vec::Vec;

use smart_leds::RGB8;
use strandcast_core::traits::{Lane, LedStrip};

/// Bits set in every LED frame header
const LED_FRAME_MARKER: u8 = 0xE0;

/// Maximum value of the hardware brightness field
const BRIGHTNESS_MAX: u8 = 31;

/// One APA102 chain bound to a bus lane
pub struct Apa102Strip {
    lane: Lane,
    pixels: Vec<RGB8>,
    /// 5-bit hardware brightness field, applied to every LED frame
    brightness5: u8,
    frame: Vec<u8>,
}

impl Apa102Strip {
    /// Create a strip with `pixel_count` addressable positions on `lane`
    pub fn new(lane: Lane, pixel_count: u32) -> Self {
        let count = pixel_count as usize;
        Self {
            lane,
            pixels: alloc::vec![RGB8::default(); count],
            brightness5: BRIGHTNESS_MAX,
            frame: Vec::with_capacity(Self::frame_len(count)),
        }
    }

    /// Encoded lane payload size for a given pixel count
    pub fn frame_len(pixel_count: usize) -> usize {
        4 + pixel_count * 4 + pixel_count / 16 + 1
    }
}

impl LedStrip for Apa102Strip {
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
        self.brightness5 = (scale.clamp(0.0, 1.0) * f32::from(BRIGHTNESS_MAX)) as u8;
    }

    fn lane_frame(&mut self) -> &[u8] {
        self.frame.clear();
        self.frame.extend_from_slice(&[0x00; 4]);

        let header = LED_FRAME_MARKER | self.brightness5;
        for px in &self.pixels {
            self.frame.extend_from_slice(&[header, px.b, px.g, px.r]);
        }

        for _ in 0..self.pixels.len() / 16 + 1 {
            self.frame.push(0x00);
        }

        &self.frame
    }
}
