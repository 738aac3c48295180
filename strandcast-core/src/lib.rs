//! Board-agnostic output-device logic for the strandcast adapter
//!
//! This crate contains everything between the protocol server above and
//! the physical lane hardware below, without depending on either:
//!
//! - Collaborator traits for the bus side ([`traits::MultiLaneBus`],
//!   [`traits::LedStrip`])
//! - The server-facing device contract ([`traits::OutputDevice`])
//! - The concrete device implementation ([`device::StrandDevice`])
//! - Chip family selection ([`device::ChipFamily`])
//! - Configuration type definitions with validation ([`config`])
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  protocol server (external)              │
//! └──────────────────────────────────────────┘
//!                  │ OutputDevice
//!                  ▼
//! ┌──────────────────────────────────────────┐
//! │  StrandDevice (this crate)               │
//! └──────────────────────────────────────────┘
//!                  │ LedStrip × N, MultiLaneBus
//!                  ▼
//! ┌──────────────────────────────────────────┐
//! │  strip drivers + lane backend            │
//! │  (strandcast-drivers)                    │
//! └──────────────────────────────────────────┘
//! ```

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod config;
pub mod device;
pub mod traits;

// Re-export key types at crate root for convenience
pub use config::{ConfigError, DeviceConfig};
pub use device::{ChipFamily, DeviceError, StrandDevice};
pub use traits::{Lane, LedStrip, MultiLaneBus, OutputDevice};

// The pixel value type shared across the device contract
pub use smart_leds::RGB8;
