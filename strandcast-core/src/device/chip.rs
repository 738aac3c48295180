//! LED chip family selection
//!
//! The two supported chip families are structurally identical at the
//! device level; they differ only in the shift clock their signal
//! tolerates and in the strip encoding requested from the lane backend.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// APA102 shift clock in MHz
///
/// 16 MHz corrupts data for LEDs a couple of hundred positions down the
/// chain; 12 MHz is stable for full-length strips.
pub const APA102_CLOCK_MHZ: u32 = 12;

/// LPD6803 shift clock in MHz
pub const LPD6803_CLOCK_MHZ: u32 = 4;

/// Supported LED chip families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ChipFamily {
    /// APA102 / SK9822: 8-bit RGB plus a 5-bit per-LED brightness field
    #[default]
    Apa102,
    /// LPD6803: 5-bit-per-channel RGB
    Lpd6803,
}

impl ChipFamily {
    /// Fixed shift clock for this chip family
    pub const fn clock_mhz(self) -> u32 {
        match self {
            ChipFamily::Apa102 => APA102_CLOCK_MHZ,
            ChipFamily::Lpd6803 => LPD6803_CLOCK_MHZ,
        }
    }

    /// Human-readable chip name
    pub const fn name(self) -> &'static str {
        match self {
            ChipFamily::Apa102 => "APA102",
            ChipFamily::Lpd6803 => "LPD6803",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_parameters() {
        assert_eq!(ChipFamily::Apa102.clock_mhz(), 12);
        assert_eq!(ChipFamily::Lpd6803.clock_mhz(), 4);
    }

    #[test]
    fn test_names() {
        assert_eq!(ChipFamily::Apa102.name(), "APA102");
        assert_eq!(ChipFamily::Lpd6803.name(), "LPD6803");
    }
}
