//! Strip driver implementations
//!
//! One driver per supported chip family, plus the [`ChipStrip`] tagged
//! variant that picks a driver at construction time. The two families
//! share their staging model and differ only in encoding, so selection
//! is a value, not a type hierarchy.

pub mod apa102;
pub mod lpd6803;

pub use apa102::Apa102Strip;
pub use lpd6803::Lpd6803Strip;

use core::fmt;

use strandcast_core::device::ChipFamily;
use strandcast_core::traits::{Lane, LedStrip, MultiLaneBus};

/// Errors from strip construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// The requested lane does not exist on the bus
    InvalidLane {
        /// 1-based connector number of the requested lane
        connector: u8,
        /// Lanes the bus drives
        lanes: u8,
    },
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::InvalidLane { connector, lanes } => {
                write!(f, "connector {connector} not present on a {lanes}-lane bus")
            }
        }
    }
}

/// A strip of either supported chip family
///
/// Dispatches the [`LedStrip`] operations to the family-specific driver.
pub enum ChipStrip {
    /// APA102 / SK9822 chain
    Apa102(Apa102Strip),
    /// LPD6803 chain
    Lpd6803(Lpd6803Strip),
}

impl ChipStrip {
    /// Construct the chip-appropriate strip on `lane` of `bus`
    ///
    /// Fails when the lane is not present on the bus; the caller treats
    /// that as fatal to device construction.
    pub fn create<B: MultiLaneBus>(
        chip: ChipFamily,
        bus: &B,
        lane: Lane,
        pixel_count: u32,
    ) -> Result<Self, StripError> {
        if lane.index() >= usize::from(bus.lane_count()) {
            return Err(StripError::InvalidLane {
                connector: lane.connector(),
                lanes: bus.lane_count(),
            });
        }

        Ok(match chip {
            ChipFamily::Apa102 => ChipStrip::Apa102(Apa102Strip::new(lane, pixel_count)),
            ChipFamily::Lpd6803 => ChipStrip::Lpd6803(Lpd6803Strip::new(lane, pixel_count)),
        })
    }
}

impl LedStrip for ChipStrip {
    fn lane(&self) -> Lane {
        match self {
            ChipStrip::Apa102(strip) => strip.lane(),
            ChipStrip::Lpd6803(strip) => strip.lane(),
        }
    }

    fn pixel_count(&self) -> u32 {
        match self {
            ChipStrip::Apa102(strip) => strip.pixel_count(),
            ChipStrip::Lpd6803(strip) => strip.pixel_count(),
        }
    }

    fn set_pixel8(&mut self, pixel: u32, r: u8, g: u8, b: u8) {
        match self {
            ChipStrip::Apa102(strip) => strip.set_pixel8(pixel, r, g, b),
            ChipStrip::Lpd6803(strip) => strip.set_pixel8(pixel, r, g, b),
        }
    }

    fn set_brightness_scale(&mut self, scale: f32) {
        match self {
            ChipStrip::Apa102(strip) => strip.set_brightness_scale(scale),
            ChipStrip::Lpd6803(strip) => strip.set_brightness_scale(scale),
        }
    }

    fn lane_frame(&mut self) -> &[u8] {
        match self {
            ChipStrip::Apa102(strip) => strip.lane_frame(),
            ChipStrip::Lpd6803(strip) => strip.lane_frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::MemoryLanes;

    #[test]
    fn test_create_selects_family() {
        let bus = MemoryLanes::new(4, 12);

        let apa = ChipStrip::create(ChipFamily::Apa102, &bus, Lane::new(0), 8).unwrap();
        assert!(matches!(apa, ChipStrip::Apa102(_)));

        let lpd = ChipStrip::create(ChipFamily::Lpd6803, &bus, Lane::new(1), 8).unwrap();
        assert!(matches!(lpd, ChipStrip::Lpd6803(_)));
    }

    #[test]
    fn test_create_rejects_missing_lane() {
        let bus = MemoryLanes::new(4, 12);
        let result = ChipStrip::create(ChipFamily::Apa102, &bus, Lane::new(4), 8);
        assert_eq!(
            result.err().unwrap(),
            StripError::InvalidLane {
                connector: 5,
                lanes: 4
            }
        );
    }

    #[test]
    fn test_dispatch_through_trait() {
        let bus = MemoryLanes::new(2, 12);
        let mut strip = ChipStrip::create(ChipFamily::Lpd6803, &bus, Lane::new(1), 4).unwrap();

        assert_eq!(strip.lane(), Lane::new(1));
        assert_eq!(strip.pixel_count(), 4);

        strip.set_pixel8(0, 255, 255, 255);
        strip.set_brightness_scale(1.0);
        assert_eq!(strip.lane_frame().len(), Lpd6803Strip::frame_len(4));
    }
}
