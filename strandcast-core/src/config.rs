//! Configuration type definitions
//!
//! Construction-time parameters for one output device. Values arrive from
//! the outside (command line, config file); validation happens here so
//! every constructor sees the same rules.

use core::fmt;

use crate::device::ChipFamily;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of connected strips
pub const DEFAULT_STRIP_COUNT: u8 = 8;

/// Default strip length in pixels
pub const DEFAULT_PIXELS_PER_STRIP: u32 = 480;

/// Output device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeviceConfig {
    /// Number of connected LED strips, one per bus lane
    pub strip_count: u8,
    /// Length of every strip in pixels
    pub pixels_per_strip: u32,
    /// LED chip family of the connected strips
    pub chip: ChipFamily,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            strip_count: DEFAULT_STRIP_COUNT,
            pixels_per_strip: DEFAULT_PIXELS_PER_STRIP,
            chip: ChipFamily::Apa102,
        }
    }
}

impl DeviceConfig {
    /// Check the configuration against the construction rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strip_count == 0 {
            return Err(ConfigError::NoStrips);
        }
        if self.pixels_per_strip == 0 {
            return Err(ConfigError::NoPixels);
        }
        Ok(())
    }
}

/// Errors from configuration validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Strip count must be positive
    NoStrips,
    /// Pixels per strip must be positive
    NoPixels,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoStrips => write!(f, "strip count must be at least 1"),
            ConfigError::NoPixels => write!(f, "pixels per strip must be at least 1"),
        }
    }
}
