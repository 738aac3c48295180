//! Output device implementation
//!
//! [`StrandDevice`] owns a fixed bank of LED strips bound to consecutive
//! lanes of one multi-lane bus and implements the server-facing
//! [`OutputDevice`] contract: staged pixel writes, synchronized frame
//! flushes, and the brightness control sub-protocol.

pub mod chip;

pub use chip::ChipFamily;

use alloc::vec::Vec;
use core::fmt;

use smart_leds::RGB8;
use strandcast_protocol::{BrightnessScale, DecodeError, PusherCommand};

use crate::config::{ConfigError, DeviceConfig};
use crate::traits::{Lane, LedStrip, MultiLaneBus, OutputDevice};

/// Errors from device construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceError<E> {
    /// Configuration rejected by validation
    Config(ConfigError),
    /// The bus has fewer lanes than the requested strip count
    InsufficientLanes {
        /// Strips requested by the configuration
        requested: u8,
        /// Lanes the bus actually drives
        available: u8,
    },
    /// A strip failed to construct on its lane
    Strip(E),
}

impl<E: fmt::Display> fmt::Display for DeviceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceError::Config(err) => write!(f, "invalid configuration: {err}"),
            DeviceError::InsufficientLanes {
                requested,
                available,
            } => write!(f, "{requested} strips requested but bus has {available} lanes"),
            DeviceError::Strip(err) => write!(f, "strip construction failed: {err}"),
        }
    }
}

/// A bank of LED strips behind one multi-lane bus
///
/// Strip `i` is bound to lane `i` for the device's entire lifetime; the
/// bank is never resized or rebound. The device owns both the strips and
/// the bus exclusively, and all resources are released on drop.
pub struct StrandDevice<S, B> {
    strips: Vec<S>,
    bus: B,
    pixels_per_strip: u32,
}

impl<S: LedStrip, B: MultiLaneBus> StrandDevice<S, B> {
    /// Construct a device with `config.strip_count` strips on consecutive
    /// bus lanes
    ///
    /// `make_strip` is called once per lane with `(bus, lane,
    /// pixels_per_strip)` and selects the chip-specific strip type. Any
    /// failure aborts construction; a partially constructed device is
    /// never returned.
    pub fn new<F, E>(mut bus: B, config: &DeviceConfig, mut make_strip: F) -> Result<Self, DeviceError<E>>
    where
        F: FnMut(&mut B, Lane, u32) -> Result<S, E>,
    {
        config.validate().map_err(DeviceError::Config)?;

        if config.strip_count > bus.lane_count() {
            return Err(DeviceError::InsufficientLanes {
                requested: config.strip_count,
                available: bus.lane_count(),
            });
        }

        let mut strips = Vec::with_capacity(config.strip_count as usize);
        for connector in 1..=config.strip_count {
            let lane = Lane::from_connector(connector);
            let strip = make_strip(&mut bus, lane, config.pixels_per_strip)
                .map_err(DeviceError::Strip)?;
            strips.push(strip);
        }

        Ok(Self {
            strips,
            bus,
            pixels_per_strip: config.pixels_per_strip,
        })
    }

    /// Read-only view of the strip bank, in lane order
    pub fn strips(&self) -> &[S] {
        &self.strips
    }

    /// Read-only view of the owned bus
    pub fn bus(&self) -> &B {
        &self.bus
    }
}

impl<S: LedStrip, B: MultiLaneBus> OutputDevice for StrandDevice<S, B> {
    type Error = B::Error;

    fn strip_count(&self) -> u8 {
        self.strips.len() as u8
    }

    fn pixels_per_strip(&self) -> u32 {
        self.pixels_per_strip
    }

    fn set_pixel(&mut self, strip: u8, pixel: u32, color: RGB8) {
        // A stale or misbehaving sender may address strips this device
        // does not have; those writes are dropped, not errors.
        if let Some(strip) = self.strips.get_mut(strip as usize) {
            strip.set_pixel8(pixel, color.r, color.g, color.b);
        }
    }

    fn flush_frame(&mut self) -> Result<(), Self::Error> {
        let bus = &mut self.bus;
        for strip in &mut self.strips {
            let lane = strip.lane();
            bus.write_lane(lane, strip.lane_frame())?;
        }
        bus.send_buffers()
    }

    fn handle_pusher_command(&mut self, buf: &[u8]) {
        match PusherCommand::decode(buf) {
            Ok(PusherCommand::GlobalBrightness { raw }) => {
                let scale = BrightnessScale::from_raw16(raw);
                log::debug!("global brightness scale {}", scale.as_f32());
                for strip in &mut self.strips {
                    strip.set_brightness_scale(scale.as_f32());
                }
            }
            Ok(PusherCommand::StripBrightness { strip, raw }) => {
                let scale = BrightnessScale::from_raw16(raw);
                match self.strips.get_mut(strip as usize) {
                    Some(s) => {
                        log::debug!("strip {} brightness scale {}", strip, scale.as_f32());
                        s.set_brightness_scale(scale.as_f32());
                    }
                    None => {
                        log::debug!("brightness for out-of-range strip {} dropped", strip);
                    }
                }
            }
            Err(DecodeError::UnknownOpcode(op)) => {
                log::warn!("ignoring unknown pusher command opcode {op:#04x}");
            }
            // Incomplete buffers are wire noise; drop them without comment
            Err(DecodeError::Empty | DecodeError::Truncated) => {}
        }
    }
}
