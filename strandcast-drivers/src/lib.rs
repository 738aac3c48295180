//! Strip drivers and lane backends
//!
//! This crate provides concrete implementations of the traits defined
//! in strandcast-core:
//!
//! - Strip drivers for the supported chip families (APA102, LPD6803),
//!   including their wire encodings
//! - The [`ChipStrip`] tagged variant selecting a driver at construction
//!   time
//! - The [`MemoryLanes`] bus backend (staging buffers, synchronized
//!   transmit snapshots) used for tests and bring-up
//!
//! Chip wire formats are an implementation detail of this crate; nothing
//! above the [`strandcast_core::traits`] boundary depends on them.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod lanes;
pub mod strip;

pub use lanes::{LaneError, MemoryLanes};
pub use strip::{Apa102Strip, ChipStrip, Lpd6803Strip, StripError};
