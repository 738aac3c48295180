//! Daemon configuration
//!
//! Construction parameters come from an optional TOML file with explicit
//! command-line flags taking precedence. Missing values fall back to the
//! device defaults (8 strips of 480 pixels, APA102).
//!
//! ```toml
//! [device]
//! strip_count = 16
//! pixels_per_strip = 240
//! chip = "lpd6803"
//! ```

use serde::Deserialize;
use strandcast_core::DeviceConfig;

/// Top-level layout of the configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output device parameters
    pub device: DeviceConfig,
}

impl FileConfig {
    /// Parse a configuration file's contents
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strandcast_core::ChipFamily;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = FileConfig::parse("").unwrap();
        assert_eq!(config.device, DeviceConfig::default());
    }

    #[test]
    fn test_full_device_section() {
        let config = FileConfig::parse(
            r#"
            [device]
            strip_count = 16
            pixels_per_strip = 240
            chip = "lpd6803"
            "#,
        )
        .unwrap();

        assert_eq!(config.device.strip_count, 16);
        assert_eq!(config.device.pixels_per_strip, 240);
        assert_eq!(config.device.chip, ChipFamily::Lpd6803);
    }

    #[test]
    fn test_partial_device_section_keeps_defaults() {
        let config = FileConfig::parse("[device]\nstrip_count = 2\n").unwrap();
        assert_eq!(config.device.strip_count, 2);
        assert_eq!(config.device.pixels_per_strip, 480);
        assert_eq!(config.device.chip, ChipFamily::Apa102);
    }

    #[test]
    fn test_unknown_chip_rejected() {
        assert!(FileConfig::parse("[device]\nchip = \"ws2812\"\n").is_err());
    }
}
